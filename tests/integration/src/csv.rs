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

//! Builds the CSV files used by `ImportProductSets`.
//!
//! Each line describes one reference image, with the columns:
//! image URI, reference image id, product set id, product id, product
//! category, product display name, product labels, and bounding polygon.

/// The product category for all the imported products.
pub const PRODUCT_CATEGORY: &str = "apparel";
/// The display name for all the imported products.
pub const DISPLAY_NAME: &str = "display name";
/// The labels for all the imported products.
pub const PRODUCT_LABELS: [(&str, &str); 2] = [("color", "black"), ("style", "formal")];

/// Formats a single CSV line.
///
/// The labels are quoted because they contain commas. The bounding polygon is
/// left empty, the service uses the full image.
pub fn build_csv_line(
    image_uri: &str,
    reference_image_id: &str,
    product_set_id: &str,
    product_id: &str,
) -> String {
    let labels = PRODUCT_LABELS
        .iter()
        .map(|(k, v)| format!("{k}={v}"))
        .collect::<Vec<_>>()
        .join(",");
    [
        image_uri,
        reference_image_id,
        product_set_id,
        product_id,
        PRODUCT_CATEGORY,
        DISPLAY_NAME,
        &format!("\"{labels}\""),
        "",
    ]
    .join(",")
}

/// Joins the lines into the contents of a CSV file.
pub fn build_csv<I>(lines: I) -> String
where
    I: IntoIterator<Item = String>,
{
    lines.into_iter().collect::<Vec<_>>().join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn line() {
        let got = build_csv_line("gs://bucket/image.jpg", "ref-1", "set-1", "product-1");
        assert_eq!(
            got,
            r#"gs://bucket/image.jpg,ref-1,set-1,product-1,apparel,display name,"color=black,style=formal","#
        );
    }

    #[test]
    fn file() {
        let got = build_csv([
            build_csv_line("gs://b/1.jpg", "r1", "s", "p"),
            build_csv_line("gs://b/2.jpg", "r2", "s", "p"),
        ]);
        let lines = got.lines().collect::<Vec<_>>();
        assert_eq!(lines.len(), 2, "{got}");
        assert!(lines[0].starts_with("gs://b/1.jpg,r1,s,p,"), "{got}");
        assert!(lines[1].starts_with("gs://b/2.jpg,r2,s,p,"), "{got}");
        assert!(!got.ends_with('\n'), "{got}");
    }

    #[test]
    fn empty() {
        assert_eq!(build_csv(Vec::new()), "");
    }
}
