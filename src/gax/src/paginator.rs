// Copyright 2025 Google LLC
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     https://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Streams over paginated list responses.
//!
//! List methods return one page at a time, with a `nextPageToken` to fetch the
//! following page. [Paginator] turns those calls into a [Stream] of pages, and
//! [ItemPaginator] flattens the pages into a stream of items.

use futures::stream::unfold;
use futures::{Stream, StreamExt};
use pin_project::pin_project;
use std::collections::VecDeque;
use std::future::Future;
use std::pin::Pin;

/// Describes a type that can be iterated over asyncly when used with [Paginator].
pub trait PageableResponse {
    type PageItem: Send;

    /// Consumes the response and returns the items in this page.
    fn items(self) -> Vec<Self::PageItem>;

    /// The token to fetch the next page, empty on the last page.
    fn next_page_token(&self) -> String;
}

/// An adapter that converts list RPCs as defined by [AIP-4233](https://google.aip.dev/client-libraries/4233)
/// into a [futures::Stream] that can be iterated over in an async fashion.
#[pin_project]
pub struct Paginator<T, E> {
    #[pin]
    stream: Pin<Box<dyn Stream<Item = Result<T, E>> + Send>>,
}

type ControlFlow = std::ops::ControlFlow<(), String>;

impl<T, E> Paginator<T, E>
where
    T: PageableResponse + Send + 'static,
    E: Send + 'static,
{
    /// Creates a new [Paginator] given the initial page token and a function
    /// to fetch the next [PageableResponse].
    pub fn new<F, X>(seed_token: String, execute: X) -> Self
    where
        X: Fn(String) -> F + Clone + Send + 'static,
        F: Future<Output = Result<T, E>> + Send + 'static,
    {
        let stream = unfold(ControlFlow::Continue(seed_token), move |state| {
            let execute = execute.clone();
            async move {
                let token = match state {
                    ControlFlow::Continue(token) => token,
                    ControlFlow::Break(_) => return None,
                };
                match execute(token).await {
                    Ok(page_resp) => {
                        let tok = page_resp.next_page_token();
                        let next_state = if tok.is_empty() {
                            ControlFlow::Break(())
                        } else {
                            ControlFlow::Continue(tok)
                        };
                        Some((Ok(page_resp), next_state))
                    }
                    Err(e) => Some((Err(e), ControlFlow::Break(()))),
                }
            }
        });
        Self {
            stream: Box::pin(stream),
        }
    }

    /// Returns the next mutation of the wrapped stream.
    pub fn next(&mut self) -> futures::stream::Next<'_, Self> {
        StreamExt::next(self)
    }

    /// Converts the page stream into a stream of individual items.
    pub fn items(self) -> ItemPaginator<T, E> {
        ItemPaginator::new(self)
    }
}

impl<T, E> Stream for Paginator<T, E> {
    type Item = Result<T, E>;

    fn poll_next(
        self: Pin<&mut Self>,
        cx: &mut std::task::Context<'_>,
    ) -> std::task::Poll<Option<Self::Item>> {
        self.project().stream.poll_next(cx)
    }
}

/// A stream over the items of all the pages returned by a list RPC.
///
/// An error fetching a page is returned once, and ends the stream.
#[pin_project]
pub struct ItemPaginator<T, E>
where
    T: PageableResponse,
{
    #[pin]
    stream: Pin<Box<dyn Stream<Item = Result<T::PageItem, E>> + Send>>,
}

impl<T, E> ItemPaginator<T, E>
where
    T: PageableResponse + Send + 'static,
    E: Send + 'static,
{
    fn new(pages: Paginator<T, E>) -> Self {
        let stream = unfold(
            (pages, VecDeque::new()),
            |(mut pages, mut buffer)| async move {
                loop {
                    if let Some(item) = buffer.pop_front() {
                        return Some((Ok(item), (pages, buffer)));
                    }
                    match pages.next().await? {
                        Ok(page) => buffer.extend(page.items()),
                        Err(e) => return Some((Err(e), (pages, buffer))),
                    }
                }
            },
        );
        Self {
            stream: Box::pin(stream),
        }
    }

    /// Returns the next mutation of the wrapped stream.
    pub fn next(&mut self) -> futures::stream::Next<'_, Self> {
        StreamExt::next(self)
    }
}

impl<T, E> Stream for ItemPaginator<T, E>
where
    T: PageableResponse,
{
    type Item = Result<T::PageItem, E>;

    fn poll_next(
        self: Pin<&mut Self>,
        cx: &mut std::task::Context<'_>,
    ) -> std::task::Poll<Option<Self::Item>> {
        self.project().stream.poll_next(cx)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    type TestError = Box<dyn std::error::Error + Send + Sync>;

    #[derive(Clone, Debug)]
    struct TestResponse {
        items: Vec<PageItem>,
        next_page_token: String,
    }

    #[derive(Clone, Debug, PartialEq)]
    struct PageItem {
        name: String,
    }

    impl PageableResponse for TestResponse {
        type PageItem = PageItem;

        fn items(self) -> Vec<PageItem> {
            self.items
        }

        fn next_page_token(&self) -> String {
            self.next_page_token.clone()
        }
    }

    fn item(name: &str) -> PageItem {
        PageItem {
            name: name.to_string(),
        }
    }

    fn test_pages() -> Vec<TestResponse> {
        vec![
            TestResponse {
                items: vec![item("item1"), item("item2")],
                next_page_token: "token2".to_string(),
            },
            TestResponse {
                items: vec![],
                next_page_token: "token3".to_string(),
            },
            TestResponse {
                items: vec![item("item3")],
                next_page_token: "".to_string(),
            },
        ]
    }

    fn fake_execute(
        pages: Vec<TestResponse>,
        tokens: Arc<Mutex<Vec<String>>>,
    ) -> impl Fn(String) -> futures::future::Ready<Result<TestResponse, TestError>> + Clone + Send
    {
        let pages = Arc::new(Mutex::new(pages));
        move |token: String| {
            tokens.lock().expect("not poisoned").push(token);
            let mut pages = pages.lock().expect("not poisoned");
            let resp = if pages.is_empty() {
                Err("no more pages".into())
            } else {
                Ok(pages.remove(0))
            };
            futures::future::ready(resp)
        }
    }

    #[tokio::test]
    async fn paginator() -> anyhow::Result<()> {
        let tokens = Arc::new(Mutex::new(Vec::new()));
        let execute = fake_execute(test_pages(), tokens.clone());
        let mut stream = Paginator::new("token1".to_string(), execute);
        let mut resps = vec![];
        while let Some(resp) = stream.next().await {
            resps.push(resp.map_err(|e| anyhow::anyhow!("{e}"))?);
        }
        assert_eq!(resps.len(), 3);
        assert_eq!(resps[0].items, vec![item("item1"), item("item2")]);
        assert_eq!(resps[2].items, vec![item("item3")]);
        assert_eq!(
            *tokens.lock().expect("not poisoned"),
            vec!["token1", "token2", "token3"]
        );
        Ok(())
    }

    #[tokio::test]
    async fn items() -> anyhow::Result<()> {
        let tokens = Arc::new(Mutex::new(Vec::new()));
        let mut stream =
            Paginator::new(String::new(), fake_execute(test_pages(), tokens)).items();
        let mut names = vec![];
        while let Some(item) = stream.next().await {
            names.push(item.map_err(|e| anyhow::anyhow!("{e}"))?.name);
        }
        assert_eq!(names, vec!["item1", "item2", "item3"]);
        Ok(())
    }

    #[tokio::test]
    async fn paginator_error() {
        let execute = |_| async { Err::<TestResponse, TestError>("err".into()) };

        let mut paginator = Paginator::new(String::new(), execute);
        let mut count = 0;
        while let Some(resp) = paginator.next().await {
            match resp {
                Ok(_) => {
                    panic!("Should not succeed");
                }
                Err(e) => {
                    assert_eq!(e.to_string(), "err");
                    count += 1;
                }
            }
        }
        assert_eq!(count, 1);
    }

    #[tokio::test]
    async fn items_error_ends_stream() {
        let tokens = Arc::new(Mutex::new(Vec::new()));
        let pages = vec![TestResponse {
            items: vec![item("item1")],
            next_page_token: "token2".to_string(),
        }];
        let mut stream = Paginator::new(String::new(), fake_execute(pages, tokens)).items();
        let first = stream.next().await;
        assert!(matches!(&first, Some(Ok(i)) if i.name == "item1"), "{first:?}");
        let second = stream.next().await;
        assert!(matches!(&second, Some(Err(_))), "{second:?}");
        let third = stream.next().await;
        assert!(third.is_none(), "{third:?}");
    }
}
