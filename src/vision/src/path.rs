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

pub(crate) const LOCATION: &str = "projects/*/locations/*";
pub(crate) const PRODUCT_SET: &str = "projects/*/locations/*/productSets/*";
pub(crate) const PRODUCT: &str = "projects/*/locations/*/products/*";
pub(crate) const REFERENCE_IMAGE: &str = "projects/*/locations/*/products/*/referenceImages/*";

/// Returns `projects/{project}/locations/{location}`.
pub fn location_path(project: &str, location: &str) -> String {
    format!("projects/{project}/locations/{location}")
}

/// Returns `projects/{project}/locations/{location}/productSets/{product_set}`.
pub fn product_set_path(project: &str, location: &str, product_set: &str) -> String {
    format!("{}/productSets/{product_set}", location_path(project, location))
}

/// Returns `projects/{project}/locations/{location}/products/{product}`.
pub fn product_path(project: &str, location: &str, product: &str) -> String {
    format!("{}/products/{product}", location_path(project, location))
}

/// Returns the name of a reference image:
/// `projects/{project}/locations/{location}/products/{product}/referenceImages/{reference_image}`.
pub fn reference_image_path(
    project: &str,
    location: &str,
    product: &str,
    reference_image: &str,
) -> String {
    format!(
        "{}/referenceImages/{reference_image}",
        product_path(project, location, product)
    )
}
