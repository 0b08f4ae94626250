use dioxus::prelude::*;
use dog_api::{Breed, Measure};

/// Everything we know about a breed, laid out as a card.
#[component]
pub fn DetailsContent(breed_data: Breed) -> Element {
    let traits: Vec<String> = breed_data.traits().into_iter().map(String::from).collect();

    rsx! {
        article { class: "details-content",
            h1 { class: "breed-name", "{breed_data.name}" }

            BreedPicture { urls: breed_data.image_urls(), alt: breed_data.name.clone() }

            dl {
                Fact { label: "Bred for", value: breed_data.bred_for.clone() }
                Fact { label: "Group", value: breed_data.breed_group.clone() }
                Fact { label: "Origin", value: breed_data.origin.clone() }
                Fact { label: "Life span", value: breed_data.life_span.clone() }
                Fact { label: "Weight", value: breed_data.weight.as_ref().map(|m| measure(m, "lb", "kg")) }
                Fact { label: "Height", value: breed_data.height.as_ref().map(|m| measure(m, "in", "cm")) }
            }

            if !traits.is_empty() {
                ul { class: "temperament",
                    for name in traits {
                        li { key: "{name}", "{name}" }
                    }
                }
            }
        }
    }
}

/// Shows the first of `urls` that loads, or nothing once they have all failed.
#[component]
fn BreedPicture(urls: Vec<String>, alt: String) -> Element {
    let mut failed = use_signal(Vec::<String>::new);

    let Some(src) = urls.into_iter().find(|url| !failed.read().contains(url)) else {
        return VNode::empty();
    };
    let broken = src.clone();

    rsx! {
        img {
            class: "breed-image",
            src,
            alt,
            onerror: move |_| failed.write().push(broken.clone()),
        }
    }
}

/// A single labelled fact. Missing and blank values are skipped.
#[component]
fn Fact(label: &'static str, value: Option<String>) -> Element {
    let Some(value) = value.filter(|v| !v.trim().is_empty()) else {
        return VNode::empty();
    };

    rsx! {
        dt { "{label}" }
        dd { "{value}" }
    }
}

fn measure(measure: &Measure, imperial: &str, metric: &str) -> String {
    format!(
        "{} {imperial} ({} {metric})",
        measure.imperial, measure.metric
    )
}
