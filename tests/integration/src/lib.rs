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

use vision_test_utils::resource_names::unique_resource_id;

pub type Result<T> = anyhow::Result<T>;

/// Runs a test case with its own cleanup registry.
macro_rules! with_cleanup {
    ($name:ident, $body:ident) => {
        pub async fn $name(harness: &$crate::Harness) -> $crate::Result<()> {
            let mut registry = vision_test_utils::cleanup::CleanupRegistry::new();
            let result = $body(harness, &mut registry).await;
            harness.finish(registry, result).await
        }
    };
}

pub mod annotate;
pub mod cleanup;
pub mod csv;
pub mod fixtures;
pub mod harness;
pub mod product_search;

pub use harness::Harness;

pub fn report_error(e: anyhow::Error) -> anyhow::Error {
    eprintln!("\n\nERROR {e:?}\n");
    tracing::error!("ERROR {e:?}");
    e
}

pub fn enable_tracing() -> tracing::subscriber::DefaultGuard {
    vision_test_utils::tracing::enable_tracing()
}

/// Returns `true` if the environment does not name a project.
///
/// The system tests create buckets and Product Search resources, they need a
/// project to do so.
pub fn skip_without_project() -> bool {
    match vision_test_utils::runtime_config::project_id() {
        Ok(_) => false,
        Err(e) => {
            tracing::warn!("skipping system tests: {e}");
            true
        }
    }
}

/// Logs every failed test case and returns the first failure.
pub fn first_failure<I>(results: I) -> Result<()>
where
    I: IntoIterator<Item = (&'static str, Result<()>)>,
{
    let mut first = None;
    for (name, result) in results {
        match result {
            Ok(()) => tracing::info!("{name} passed"),
            Err(e) => {
                tracing::error!("{name} failed: {e:?}");
                first.get_or_insert(e.context(name));
            }
        }
    }
    match first {
        None => Ok(()),
        Some(e) => Err(e),
    }
}

/// A resource id with the given prefix, e.g. `set_1714060000000_x4k2m9ab`.
pub(crate) fn random_id(prefix: &str) -> String {
    format!("{prefix}{}", unique_resource_id("_"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_failure_success() -> anyhow::Result<()> {
        first_failure([("a", Ok(())), ("b", Ok(()))])?;
        Ok(())
    }

    #[test]
    fn first_failure_keeps_first_error() {
        let got = first_failure([
            ("a", Ok(())),
            ("b", Err(anyhow::anyhow!("b failed"))),
            ("c", Err(anyhow::anyhow!("c failed"))),
        ]);
        let err = got.unwrap_err();
        assert_eq!(err.to_string(), "b");
        assert_eq!(err.root_cause().to_string(), "b failed");
    }

    #[test]
    fn random_ids() {
        let id = random_id("set");
        assert!(id.starts_with("set_"), "{id}");
        assert_ne!(id, random_id("set"));
    }
}
