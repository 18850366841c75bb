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

//! System tests for the `ProductSearch` client.

use crate::csv::{build_csv, build_csv_line};
use crate::fixtures::{self, FACE_FILE};
use crate::{Harness, Result, random_id};
use lro::Poller;
use vision::model::{
    FieldMask, ImportProductSetsGcsSource, ImportProductSetsInputConfig, Product, ProductSet,
    ReferenceImage,
};
use vision::path::{product_path, product_set_path, reference_image_path};
use vision_test_utils::cleanup::{CleanupRegistry, Resource};

/// Runs all the `ProductSearch` test cases in a new suite.
pub async fn run() -> Result<()> {
    let harness = Harness::setup().await?;
    let results = [
        ("create_product_set", create_product_set(&harness).await),
        ("get_product_set", get_product_set(&harness).await),
        ("list_product_sets", list_product_sets(&harness).await),
        ("update_product_set", update_product_set(&harness).await),
        ("create_product", create_product(&harness).await),
        ("get_product", get_product(&harness).await),
        ("update_product", update_product(&harness).await),
        ("list_products", list_products(&harness).await),
        (
            "list_products_in_product_set",
            list_products_in_product_set(&harness).await,
        ),
        ("reference_image", reference_image(&harness).await),
        ("import_product_sets", import_product_sets(&harness).await),
    ];
    let teardown = harness.teardown().await;
    crate::first_failure(results)?;
    teardown
}

with_cleanup!(create_product_set, create_product_set_impl);
with_cleanup!(get_product_set, get_product_set_impl);
with_cleanup!(list_product_sets, list_product_sets_impl);
with_cleanup!(update_product_set, update_product_set_impl);
with_cleanup!(create_product, create_product_impl);
with_cleanup!(get_product, get_product_impl);
with_cleanup!(update_product, update_product_impl);
with_cleanup!(list_products, list_products_impl);
with_cleanup!(list_products_in_product_set, list_products_in_product_set_impl);
with_cleanup!(reference_image, reference_image_impl);
with_cleanup!(import_product_sets, import_product_sets_impl);

/// Creates a product set with a new id, and verifies its name.
async fn new_product_set(harness: &Harness, registry: &mut CleanupRegistry) -> Result<String> {
    let id = random_id("set");
    let want = product_set_path(&harness.project_id, &harness.location_id, &id);
    let response = harness
        .product_search
        .create_product_set(harness.location_path())
        .set_product_set(ProductSet::new().set_display_name("display name"))
        .set_product_set_id(&id)
        .send()
        .await?;
    tracing::info!("created product set {response:?}");
    registry.register(Resource::ProductSet(response.name.clone()));
    anyhow::ensure!(response.name == want, "got {}, want {want}", response.name);
    Ok(response.name)
}

/// Creates a product with a new id, and verifies its name.
async fn new_product(harness: &Harness, registry: &mut CleanupRegistry) -> Result<String> {
    let id = random_id("product");
    let want = product_path(&harness.project_id, &harness.location_id, &id);
    let response = harness
        .product_search
        .create_product(harness.location_path())
        .set_product(
            Product::new()
                .set_display_name("product display name")
                .set_product_category("apparel"),
        )
        .set_product_id(&id)
        .send()
        .await?;
    tracing::info!("created product {response:?}");
    registry.register(Resource::Product(response.name.clone()));
    anyhow::ensure!(response.name == want, "got {}, want {want}", response.name);
    Ok(response.name)
}

async fn create_product_set_impl(harness: &Harness, registry: &mut CleanupRegistry) -> Result<()> {
    new_product_set(harness, registry).await?;
    Ok(())
}

async fn get_product_set_impl(harness: &Harness, registry: &mut CleanupRegistry) -> Result<()> {
    let name = new_product_set(harness, registry).await?;
    let got = harness.product_search.get_product_set(&name).send().await?;
    anyhow::ensure!(got.name == name, "{got:?}");
    anyhow::ensure!(got.display_name == "display name", "{got:?}");
    Ok(())
}

async fn list_product_sets_impl(harness: &Harness, registry: &mut CleanupRegistry) -> Result<()> {
    let name = new_product_set(harness, registry).await?;
    let mut items = harness
        .product_search
        .list_product_sets(harness.location_path())
        .by_item();
    while let Some(set) = items.next().await {
        if set?.name == name {
            return Ok(());
        }
    }
    anyhow::bail!("product set {name} not found in list_product_sets()")
}

async fn update_product_set_impl(harness: &Harness, registry: &mut CleanupRegistry) -> Result<()> {
    const NEW_DISPLAY_NAME: &str = "updated name";
    let name = new_product_set(harness, registry).await?;
    let updated = harness
        .product_search
        .update_product_set()
        .set_product_set(
            ProductSet::new()
                .set_name(&name)
                .set_display_name(NEW_DISPLAY_NAME),
        )
        .set_update_mask(FieldMask::new().set_paths(["display_name"]))
        .send()
        .await?;
    anyhow::ensure!(updated.name == name, "{updated:?}");
    anyhow::ensure!(updated.display_name == NEW_DISPLAY_NAME, "{updated:?}");
    Ok(())
}

async fn create_product_impl(harness: &Harness, registry: &mut CleanupRegistry) -> Result<()> {
    new_product(harness, registry).await?;
    Ok(())
}

async fn get_product_impl(harness: &Harness, registry: &mut CleanupRegistry) -> Result<()> {
    let name = new_product(harness, registry).await?;
    let got = harness.product_search.get_product(&name).send().await?;
    anyhow::ensure!(got.name == name, "{got:?}");
    anyhow::ensure!(got.product_category == "apparel", "{got:?}");
    Ok(())
}

async fn update_product_impl(harness: &Harness, registry: &mut CleanupRegistry) -> Result<()> {
    const NEW_DISPLAY_NAME: &str = "updated product name";
    let name = new_product(harness, registry).await?;
    let updated = harness
        .product_search
        .update_product()
        .set_product(
            Product::new()
                .set_name(&name)
                .set_display_name(NEW_DISPLAY_NAME),
        )
        .set_update_mask(FieldMask::new().set_paths(["display_name"]))
        .send()
        .await?;
    anyhow::ensure!(updated.name == name, "{updated:?}");
    anyhow::ensure!(updated.display_name == NEW_DISPLAY_NAME, "{updated:?}");
    Ok(())
}

async fn list_products_impl(harness: &Harness, registry: &mut CleanupRegistry) -> Result<()> {
    let name = new_product(harness, registry).await?;
    let mut items = harness
        .product_search
        .list_products(harness.location_path())
        .by_item();
    while let Some(product) = items.next().await {
        if product?.name == name {
            return Ok(());
        }
    }
    anyhow::bail!("product {name} not found in list_products()")
}

async fn list_products_in_product_set_impl(
    harness: &Harness,
    registry: &mut CleanupRegistry,
) -> Result<()> {
    let set_name = new_product_set(harness, registry).await?;
    let product_name = new_product(harness, registry).await?;
    harness
        .product_search
        .add_product_to_product_set(&set_name)
        .set_product(&product_name)
        .send()
        .await?;

    let mut listed = Vec::new();
    let mut items = harness
        .product_search
        .list_products_in_product_set(&set_name)
        .by_item();
    while let Some(product) = items.next().await {
        listed.push(product?.name);
    }
    anyhow::ensure!(listed == [product_name.clone()], "{listed:?}");

    harness
        .product_search
        .remove_product_from_product_set(&set_name)
        .set_product(&product_name)
        .send()
        .await?;
    Ok(())
}

async fn reference_image_impl(harness: &Harness, registry: &mut CleanupRegistry) -> Result<()> {
    let product_name = new_product(harness, registry).await?;
    let product_id = product_name
        .rsplit('/')
        .next()
        .unwrap_or_default()
        .to_string();
    let uri = fixtures::upload(
        harness,
        registry,
        "reference_image_test.jpg",
        FACE_FILE,
        "image/jpeg",
    )
    .await?;

    let id = random_id("reference_image");
    let want = reference_image_path(&harness.project_id, &harness.location_id, &product_id, &id);
    let created = harness
        .product_search
        .create_reference_image(&product_name)
        .set_reference_image(ReferenceImage::new().set_uri(&uri))
        .set_reference_image_id(&id)
        .send()
        .await?;
    registry.register(Resource::ReferenceImage(created.name.clone()));
    anyhow::ensure!(created.name == want, "{created:?}");

    let got = harness
        .product_search
        .get_reference_image(&want)
        .send()
        .await?;
    anyhow::ensure!(got.name == want, "{got:?}");
    anyhow::ensure!(got.uri == uri, "{got:?}");

    let mut listed = Vec::new();
    let mut items = harness
        .product_search
        .list_reference_images(&product_name)
        .by_item();
    while let Some(image) = items.next().await {
        listed.push(image?.name);
    }
    anyhow::ensure!(listed == [want], "{listed:?}");
    Ok(())
}

async fn import_product_sets_impl(
    harness: &Harness,
    registry: &mut CleanupRegistry,
) -> Result<()> {
    const IMAGE_PREFIX: &str = "import_sets_image_";
    let project = &harness.project_id;
    let location = &harness.location_id;

    // The import creates these resources. Register them upfront, the cleanup
    // ignores any that do not exist.
    let product_set_id = random_id("set");
    registry.register(Resource::ProductSet(product_set_path(
        project,
        location,
        &product_set_id,
    )));
    let product_id = random_id("product");
    registry.register(Resource::Product(product_path(project, location, &product_id)));
    let reference_image_ids = [random_id("reference_image_1"), random_id("reference_image_2")];
    for id in reference_image_ids.iter() {
        registry.register(Resource::ReferenceImage(reference_image_path(
            project,
            location,
            &product_id,
            id,
        )));
    }

    let mut uris = Vec::new();
    let mut lines = Vec::new();
    for (i, id) in reference_image_ids.iter().enumerate() {
        let object = format!("{IMAGE_PREFIX}{}.jpg", i + 1);
        let uri = fixtures::upload(harness, registry, &object, FACE_FILE, "image/jpeg").await?;
        lines.push(build_csv_line(&uri, id, &product_set_id, &product_id));
        uris.push(uri);
    }
    let line_count = lines.len();
    let csv_uri = fixtures::upload_bytes(
        harness,
        registry,
        "import_sets.csv",
        build_csv(lines),
        "text/csv",
    )
    .await?;

    tracing::info!("start import_product_sets() LRO and poll it to completion");
    let response = harness
        .product_search
        .import_product_sets(harness.location_path())
        .set_input_config(
            ImportProductSetsInputConfig::new()
                .set_gcs_source(ImportProductSetsGcsSource::new().set_csv_file_uri(csv_uri)),
        )
        .poller()
        .until_done()
        .await?;
    tracing::info!("import_product_sets() LRO finished: {response:?}");

    anyhow::ensure!(response.statuses.len() == line_count, "{response:?}");
    anyhow::ensure!(
        response.statuses.iter().all(|s| s.is_ok()),
        "{:?}",
        response.statuses
    );
    let mut imported = response
        .reference_images
        .iter()
        .map(|i| i.uri.clone())
        .collect::<Vec<_>>();
    imported.sort();
    anyhow::ensure!(imported == uris, "{response:?}");
    Ok(())
}
