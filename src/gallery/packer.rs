//! Masonry Gallery Packer
//!
//! Greedy shortest-column-first packing: each image lands in the currently
//! shortest column, ties broken by the lowest column index. Single pass, no
//! backtracking. The goal is visually even columns, not optimal bin balance,
//! but placement must stay deterministic — rendering regressions are judged
//! against exact column assignments.

use super::models::{ColumnAssignment, GalleryImage};
use crate::error::InvalidInputError;

/// Assigns each image to a column, balancing rendered column heights.
///
/// `column_width` is the content width of one column, computed by the host
/// from viewport width, padding, spacing and `column_count`; the packer does
/// no layout geometry of its own. Images are processed in input order, which
/// is also the display order within each column.
pub fn pack_columns(
    images: &[GalleryImage],
    column_count: usize,
    column_width: f64,
    spacing: f64,
) -> Result<ColumnAssignment, InvalidInputError> {
    if column_count == 0 {
        return Err(InvalidInputError::ZeroColumns);
    }
    if !column_width.is_finite() || column_width <= 0.0 {
        return Err(InvalidInputError::BadColumnWidth {
            value: column_width,
        });
    }
    if !spacing.is_finite() || spacing < 0.0 {
        return Err(InvalidInputError::BadSpacing { value: spacing });
    }

    let mut columns: Vec<Vec<String>> = vec![Vec::new(); column_count];
    let mut heights = vec![0.0_f64; column_count];

    for image in images {
        let rendered_height = column_width / aspect_ratio(image);
        let target = shortest_column(&heights);
        columns[target].push(image.url.clone());
        heights[target] += rendered_height + spacing;
    }

    Ok(ColumnAssignment { columns })
}

/// Width-over-height ratio, falling back to a 1:1 square when either
/// dimension is missing or non-positive.
fn aspect_ratio(image: &GalleryImage) -> f64 {
    let width = image.natural_width;
    let height = image.natural_height;
    if width.is_finite() && height.is_finite() && width > 0.0 && height > 0.0 {
        width / height
    } else {
        1.0
    }
}

/// Index of the shortest column; equal heights resolve to the lowest index.
fn shortest_column(heights: &[f64]) -> usize {
    let mut target = 0;
    for (index, height) in heights.iter().enumerate().skip(1) {
        if *height < heights[target] {
            target = index;
        }
    }
    target
}

#[cfg(test)]
mod tests {
    use super::*;

    fn image(url: &str, width: f64, height: f64) -> GalleryImage {
        GalleryImage {
            url: url.into(),
            natural_width: width,
            natural_height: height,
        }
    }

    fn squares(count: usize) -> Vec<GalleryImage> {
        (1..=count)
            .map(|i| image(&format!("img{}", i), 100.0, 100.0))
            .collect()
    }

    #[test]
    fn test_every_image_placed_exactly_once() {
        let images = vec![
            image("a", 400.0, 300.0),
            image("b", 300.0, 400.0),
            image("c", 100.0, 100.0),
            image("d", 160.0, 90.0),
            image("e", 90.0, 160.0),
            image("f", 500.0, 500.0),
            image("g", 640.0, 480.0),
        ];
        let assignment = pack_columns(&images, 3, 120.0, 8.0).unwrap();

        let mut placed: Vec<&str> = assignment
            .columns
            .iter()
            .flatten()
            .map(String::as_str)
            .collect();
        assert_eq!(placed.len(), images.len());
        placed.sort();
        placed.dedup();
        assert_eq!(placed.len(), images.len());
    }

    #[test]
    fn test_identical_input_packs_identically() {
        let images = squares(5);
        let first = pack_columns(&images, 2, 100.0, 10.0).unwrap();
        let second = pack_columns(&images, 2, 100.0, 10.0).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_equal_heights_break_toward_lowest_index() {
        // Three 1:1 images over two columns: img1 → col0 (empty tie), img2 →
        // col1 (col0 now taller), img3 → col0 (heights equal again).
        let assignment = pack_columns(&squares(3), 2, 100.0, 0.0).unwrap();
        assert_eq!(assignment.columns[0], vec!["img1", "img3"]);
        assert_eq!(assignment.columns[1], vec!["img2"]);
    }

    #[test]
    fn test_tall_image_fills_a_column_alone() {
        let images = vec![
            image("tall", 100.0, 400.0),
            image("s1", 100.0, 100.0),
            image("s2", 100.0, 100.0),
            image("s3", 100.0, 100.0),
        ];
        let assignment = pack_columns(&images, 2, 100.0, 0.0).unwrap();

        // The tall image renders at 4x column width; the squares stack in
        // the other column until they catch up.
        assert_eq!(assignment.columns[0], vec!["tall"]);
        assert_eq!(assignment.columns[1], vec!["s1", "s2", "s3"]);
    }

    #[test]
    fn test_single_column_keeps_input_order() {
        let images = squares(4);
        let assignment = pack_columns(&images, 1, 100.0, 4.0).unwrap();
        assert_eq!(assignment.columns.len(), 1);
        assert_eq!(assignment.columns[0], vec!["img1", "img2", "img3", "img4"]);
    }

    #[test]
    fn test_unknown_dimensions_fall_back_to_square() {
        let images = vec![image("a", 0.0, 0.0), image("b", 100.0, 100.0)];
        let assignment = pack_columns(&images, 2, 100.0, 0.0).unwrap();
        // Both render square, so they split across the two columns.
        assert_eq!(assignment.columns[0], vec!["a"]);
        assert_eq!(assignment.columns[1], vec!["b"]);
    }

    #[test]
    fn test_empty_input_yields_empty_columns() {
        let assignment = pack_columns(&[], 3, 100.0, 0.0).unwrap();
        assert_eq!(assignment.columns, vec![Vec::<String>::new(); 3]);
    }

    #[test]
    fn test_zero_columns_rejected() {
        let result = pack_columns(&squares(2), 0, 100.0, 0.0);
        assert_eq!(result, Err(InvalidInputError::ZeroColumns));
    }

    #[test]
    fn test_negative_spacing_rejected() {
        let result = pack_columns(&squares(2), 2, 100.0, -1.0);
        assert!(matches!(result, Err(InvalidInputError::BadSpacing { .. })));
    }

    #[test]
    fn test_non_positive_column_width_rejected() {
        let result = pack_columns(&squares(2), 2, 0.0, 0.0);
        assert!(matches!(
            result,
            Err(InvalidInputError::BadColumnWidth { .. })
        ));
    }
}
