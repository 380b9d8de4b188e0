//! PNG and animated GIF export of solutions
//!
//! Each cell becomes a `cell_size` square. Mats are filled and outlined on
//! every side except the one shared with their partner, so mat boundaries stay
//! visible where two mats of the same colour meet.

use std::path::Path;

use image::codecs::gif::{GifEncoder, Repeat};
use image::{Delay, Frame, Rgba, RgbaImage};

use crate::algorithm::Solution;
use crate::io::configuration::{
    BLOCKED_COLOR, BORDER_COLOR, EMPTY_COLOR, HALF_COLOR, MAT_COLOR, VIEWER_MIN_FRAME_DELAY_MS,
};
use crate::io::error::{LayoutError, Result, invalid_parameter};
use crate::spatial::Tag;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Side {
    Top,
    Bottom,
    Left,
    Right,
}

impl Side {
    const ALL: [Self; 4] = [Self::Top, Self::Bottom, Self::Left, Self::Right];
}

// Image rows grow downward while grid rows grow upward
const fn shared_side(tag: Tag) -> Option<Side> {
    match tag {
        Tag::North => Some(Side::Bottom),
        Tag::South => Some(Side::Top),
        Tag::West => Some(Side::Right),
        Tag::East => Some(Side::Left),
        Tag::Half | Tag::Empty | Tag::Blocked => None,
    }
}

const fn fill_color(tag: Tag) -> [u8; 4] {
    match tag {
        Tag::North | Tag::East | Tag::South | Tag::West => MAT_COLOR,
        Tag::Half => HALF_COLOR,
        Tag::Blocked => BLOCKED_COLOR,
        Tag::Empty => EMPTY_COLOR,
    }
}

fn image_extent(cells: usize, cell_size: u32, parameter: &'static str) -> Result<u32> {
    u32::try_from(cells)
        .ok()
        .and_then(|count| count.checked_mul(cell_size))
        .ok_or_else(|| invalid_parameter(parameter, &cells, &"image would be too large"))
}

/// Draw a solution into an RGBA image
///
/// # Errors
///
/// Returns `InvalidParameter` if `cell_size` is zero or the image size
/// overflows
pub fn draw_solution(solution: &Solution, cell_size: u32) -> Result<RgbaImage> {
    if cell_size == 0 {
        return Err(invalid_parameter(
            "cell_size",
            &cell_size,
            &"must be positive",
        ));
    }

    let rows = solution.rows();
    let width = image_extent(solution.cols(), cell_size, "width")?;
    let height = image_extent(rows, cell_size, "height")?;
    let border = (cell_size / 12).max(1);

    let mut img = RgbaImage::new(width, height);

    for ((row, col), &tag) in solution.tags().indexed_iter() {
        let left = col as u32 * cell_size;
        let top = (rows - 1 - row) as u32 * cell_size;

        for y in top..top + cell_size {
            for x in left..left + cell_size {
                img.put_pixel(x, y, Rgba(fill_color(tag)));
            }
        }

        if !tag.is_occupied() {
            continue;
        }

        let open = shared_side(tag);
        for side in Side::ALL {
            if open == Some(side) {
                continue;
            }
            for depth in 0..border {
                for step in 0..cell_size {
                    let (x, y) = match side {
                        Side::Top => (left + step, top + depth),
                        Side::Bottom => (left + step, top + cell_size - 1 - depth),
                        Side::Left => (left + depth, top + step),
                        Side::Right => (left + cell_size - 1 - depth, top + step),
                    };
                    img.put_pixel(x, y, Rgba(BORDER_COLOR));
                }
            }
        }
    }

    Ok(img)
}

fn create_parent_dir(output_path: &Path) -> Result<()> {
    if let Some(parent) = output_path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent).map_err(|e| LayoutError::FileSystem {
            path: parent.to_path_buf(),
            operation: "create directory",
            source: e,
        })?;
    }
    Ok(())
}

/// Export one solution as a PNG image
///
/// # Errors
///
/// Returns an error if:
/// - `cell_size` is zero or the image would be too large
/// - The parent directory cannot be created
/// - The image cannot be saved to the specified path
pub fn export_solution_png(solution: &Solution, output_path: &Path, cell_size: u32) -> Result<()> {
    let img = draw_solution(solution, cell_size)?;
    create_parent_dir(output_path)?;

    img.save(output_path)
        .map_err(|e| LayoutError::ImageExport {
            path: output_path.to_path_buf(),
            source: e,
        })?;

    Ok(())
}

/// Export all solutions as an animated GIF, one frame per solution
///
/// Delays below what viewers reliably honour are raised to
/// `VIEWER_MIN_FRAME_DELAY_MS`.
///
/// # Errors
///
/// Returns an error if:
/// - `solutions` is empty
/// - `cell_size` is zero or the image would be too large
/// - File system operations fail
/// - GIF encoding fails
pub fn export_solutions_gif(
    solutions: &[Solution],
    output_path: &Path,
    cell_size: u32,
    frame_delay_ms: u32,
) -> Result<()> {
    if solutions.is_empty() {
        return Err(LayoutError::NothingToExport {
            reason: "no solutions to animate".to_string(),
        });
    }

    let delay = Delay::from_numer_denom_ms(frame_delay_ms.max(VIEWER_MIN_FRAME_DELAY_MS), 1);
    let frames = solutions
        .iter()
        .map(|solution| {
            draw_solution(solution, cell_size)
                .map(|img| Frame::from_parts(img, 0, 0, delay))
        })
        .collect::<Result<Vec<_>>>()?;

    create_parent_dir(output_path)?;
    let file = std::fs::File::create(output_path).map_err(|e| LayoutError::FileSystem {
        path: output_path.to_path_buf(),
        operation: "create file",
        source: e,
    })?;

    let image_error = |e| LayoutError::ImageExport {
        path: output_path.to_path_buf(),
        source: e,
    };
    let mut encoder = GifEncoder::new(file);
    encoder.set_repeat(Repeat::Infinite).map_err(image_error)?;
    encoder.encode_frames(frames).map_err(image_error)?;

    Ok(())
}
