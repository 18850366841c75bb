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

//! Tracks the resources created by a test and deletes them in teardown.
//!
//! Resources have dependencies: a product set can only be deleted once its
//! products are gone, and a product once its reference images are gone.
//! [CleanupRegistry::teardown] deletes them in an order that respects those
//! dependencies, regardless of the order they were registered in.

use std::fmt::Display;

/// A resource created during a test case.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Resource {
    /// An object in a storage bucket.
    Blob { bucket: String, name: String },
    /// A reference image, by its full resource name.
    ReferenceImage(String),
    /// A product, by its full resource name.
    Product(String),
    /// A product set, by its full resource name.
    ProductSet(String),
}

impl Resource {
    pub fn blob(bucket: impl Into<String>, name: impl Into<String>) -> Self {
        Self::Blob {
            bucket: bucket.into(),
            name: name.into(),
        }
    }

    // Lower values are deleted first.
    fn teardown_rank(&self) -> u8 {
        match self {
            Self::Blob { .. } => 0,
            Self::ReferenceImage(_) => 1,
            Self::Product(_) => 2,
            Self::ProductSet(_) => 3,
        }
    }
}

impl Display for Resource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Blob { bucket, name } => write!(f, "gs://{bucket}/{name}"),
            Self::ReferenceImage(name) | Self::Product(name) | Self::ProductSet(name) => {
                write!(f, "{name}")
            }
        }
    }
}

/// Deletes a single resource.
///
/// The integration tests implement this trait over the Vision and Storage
/// clients.
#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait ResourceDeleter: Send + Sync {
    async fn delete(&self, resource: &Resource) -> anyhow::Result<()>;
}

/// The resources created by one test case.
#[derive(Debug, Default)]
pub struct CleanupRegistry {
    resources: Vec<Resource>,
}

impl CleanupRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a resource for deletion.
    ///
    /// Returns `false`, and does nothing, if the resource is already
    /// registered.
    pub fn register(&mut self, resource: Resource) -> bool {
        if self.resources.contains(&resource) {
            return false;
        }
        self.resources.push(resource);
        true
    }

    pub fn len(&self) -> usize {
        self.resources.len()
    }

    pub fn is_empty(&self) -> bool {
        self.resources.is_empty()
    }

    /// Deletes all the registered resources.
    ///
    /// Blobs go first, then reference images, products, and finally product
    /// sets. Within each kind the registration order is kept. Every delete is
    /// attempted even if some fail; the first failure is returned.
    pub async fn teardown(self, deleter: &dyn ResourceDeleter) -> anyhow::Result<()> {
        let mut resources = self.resources;
        // `sort_by_key` is stable.
        resources.sort_by_key(Resource::teardown_rank);
        let mut first_error = None;
        for resource in resources.iter() {
            match deleter.delete(resource).await {
                Ok(()) => tracing::info!("deleted {resource}"),
                Err(e) => {
                    tracing::warn!("error deleting {resource}: {e:?}");
                    first_error.get_or_insert(e);
                }
            }
        }
        match first_error {
            None => Ok(()),
            Some(e) => Err(e),
        }
    }
}
