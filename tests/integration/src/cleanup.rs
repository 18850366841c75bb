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

use gax::error::rpc::Code;
use storage::client::Storage;
use vision::client::ProductSearch;
use vision_test_utils::cleanup::{Resource, ResourceDeleter};

/// Deletes test resources using the Product Search and Storage clients.
///
/// Resources that no longer exist are treated as deleted. The tests register
/// some resources before the service creates them, e.g. the products in a
/// bulk import.
#[derive(Clone, Debug)]
pub struct ClientDeleter {
    product_search: ProductSearch,
    storage: Storage,
}

impl ClientDeleter {
    pub fn new(product_search: ProductSearch, storage: Storage) -> Self {
        Self {
            product_search,
            storage,
        }
    }

    async fn delete_impl(&self, resource: &Resource) -> gax::Result<()> {
        match resource {
            Resource::Blob { bucket, name } => self.storage.delete_object(bucket, name).await,
            Resource::ReferenceImage(name) => {
                self.product_search
                    .delete_reference_image(name)
                    .send()
                    .await
            }
            Resource::Product(name) => self.product_search.delete_product(name).send().await,
            Resource::ProductSet(name) => {
                self.product_search.delete_product_set(name).send().await
            }
        }
    }
}

#[async_trait::async_trait]
impl ResourceDeleter for ClientDeleter {
    async fn delete(&self, resource: &Resource) -> anyhow::Result<()> {
        match self.delete_impl(resource).await {
            Ok(()) => Ok(()),
            Err(e) if e.status().is_some_and(|s| s.code == Code::NotFound) => {
                tracing::info!("{resource} was already deleted");
                Ok(())
            }
            Err(e) => Err(e.into()),
        }
    }
}
