#![allow(dead_code)]

use std::{cell::RefCell, collections::HashMap, rc::Rc, time::Duration};

use async_trait::async_trait;
use breed_explorer::{Explorer, Route};
use dioxus::prelude::*;
use dioxus::router::RouterContext;
use dioxus_core::NoOpMutations;
use dioxus_history::{provide_history_context, MemoryHistory};
use dog_api::{ApiConfig, ApiError, BreedClient, Transport};
use http::{HeaderMap, Method, Request};

pub const TEST_API_KEY: &str = "test-api-key";

/// How the mock answers a given url.
#[derive(Clone, Debug)]
pub enum Reply {
    Json(serde_json::Value),
    JsonAfter(Duration, serde_json::Value),
    Fail,
    Pending,
}

/// A request as it would have gone over the wire.
#[derive(Clone, Debug)]
pub struct Recorded {
    pub method: Method,
    pub url: String,
    pub headers: HeaderMap,
}

/// Answers from a table of canned replies and records every request. Unknown urls get a 404.
#[derive(Clone, Default)]
pub struct MockTransport {
    replies: Rc<RefCell<HashMap<String, Reply>>>,
    requests: Rc<RefCell<Vec<Recorded>>>,
}

impl MockTransport {
    pub fn reply(self, url: &str, reply: Reply) -> Self {
        self.replies.borrow_mut().insert(url.to_string(), reply);
        self
    }

    pub fn requests(&self) -> Vec<Recorded> {
        self.requests.borrow().clone()
    }

    pub fn urls(&self) -> Vec<String> {
        self.requests().into_iter().map(|r| r.url).collect()
    }

    pub fn client(&self) -> BreedClient {
        BreedClient::with_transport(
            ApiConfig::default().with_api_key(TEST_API_KEY),
            self.clone(),
        )
    }
}

#[async_trait(?Send)]
impl Transport for MockTransport {
    async fn execute(&self, request: Request<()>) -> dog_api::Result<serde_json::Value> {
        let url = request.uri().to_string();
        self.requests.borrow_mut().push(Recorded {
            method: request.method().clone(),
            url: url.clone(),
            headers: request.headers().clone(),
        });

        let reply = self.replies.borrow().get(&url).cloned();
        match reply {
            Some(Reply::Json(body)) => Ok(body),
            Some(Reply::JsonAfter(delay, body)) => {
                tokio::time::sleep(delay).await;
                Ok(body)
            }
            Some(Reply::Fail) => Err(ApiError::Transport("connection refused".to_string())),
            Some(Reply::Pending) => std::future::pending().await,
            None => Err(ApiError::Status { status: 404, url }),
        }
    }
}

#[derive(Props, Clone, PartialEq)]
struct HarnessProps {
    path: String,
    client: BreedClient,
}

#[allow(non_snake_case)]
fn Harness(props: HarnessProps) -> Element {
    use_hook(|| provide_history_context(Rc::new(MemoryHistory::with_initial_path(&props.path))));

    rsx! {
        Explorer { client: props.client.clone() }
    }
}

/// Mount the whole app at `path`, talking to `transport`.
pub fn mount(path: &str, transport: &MockTransport) -> VirtualDom {
    let mut dom = VirtualDom::new_with_props(
        Harness,
        HarnessProps {
            path: path.to_string(),
            client: transport.client(),
        },
    );
    dom.rebuild_in_place();
    dom
}

/// Let spawned tasks run and re-render until nothing is left to do.
pub async fn settle(dom: &mut VirtualDom) {
    for _ in 0..10 {
        let work = tokio::time::timeout(Duration::from_millis(200), dom.wait_for_work());
        if work.await.is_err() {
            break;
        }
        dom.render_immediate(&mut NoOpMutations);
    }
}

/// Navigate the mounted app to `to`, the same way a clicked [`Link`] would.
pub fn navigate(dom: &VirtualDom, to: Route) {
    dom.in_runtime(|| {
        // the router lives a few scopes below the harness
        let (scope, router) = (0..64)
            .find_map(|id| {
                dom.in_scope(ScopeId(id), try_consume_context::<RouterContext>)
                    .map(|router| (ScopeId(id), router))
            })
            .expect("the app renders a router");
        dom.in_scope(scope, || {
            let _ = router.push(to);
        });
    });
}

pub fn html(dom: &VirtualDom) -> String {
    dioxus_ssr::render(dom)
}

pub fn labrador() -> serde_json::Value {
    serde_json::json!({
        "id": 1,
        "name": "Labrador Retriever",
        "temperament": "Friendly, Active",
        "life_span": "10 - 13 years",
        "weight": { "imperial": "55 - 80", "metric": "25 - 36" }
    })
}
