//! Image-level compositing: place a foreground image over a background at a
//! signed pixel offset.

use rayon::prelude::*;

use crate::{
    composite::over::blend_row,
    foundation::core::{ImageRgba, PixelOffset},
    foundation::error::LamellaResult,
};

/// Blend `foreground` over `background` in place.
///
/// The foreground's top-left pixel lands at `offset` in background
/// coordinates; pixels falling outside the background are silently skipped,
/// so any placement is valid, including fully off-canvas ones. Fully
/// transparent foreground pixels leave the destination untouched.
#[tracing::instrument(skip(background, foreground), fields(
    bg_w = background.width,
    bg_h = background.height,
    fg_w = foreground.width,
    fg_h = foreground.height,
))]
pub fn composite_over(
    background: &mut ImageRgba,
    foreground: &ImageRgba,
    opacity: f32,
    offset: PixelOffset,
) -> LamellaResult<()> {
    let Some(o) = checked_overlap(background, foreground, offset)? else {
        return Ok(());
    };

    let bg_stride = background.stride();
    let fg_stride = foreground.stride();
    for row in 0..o.rows {
        let bg_start = (o.bg_y0 + row) * bg_stride + o.bg_x0 * 4;
        let fg_start = (o.fg_y0 + row) * fg_stride + o.fg_x0 * 4;
        blend_row(
            &mut background.data[bg_start..bg_start + o.cols * 4],
            &foreground.data[fg_start..fg_start + o.cols * 4],
            opacity,
        );
    }
    Ok(())
}

/// [`composite_over`] with the overlapping scanlines blended in parallel.
///
/// Each output pixel depends only on itself and the corresponding input
/// pixel, so the result is identical to the sequential path.
#[tracing::instrument(skip(background, foreground), fields(
    bg_w = background.width,
    bg_h = background.height,
    fg_w = foreground.width,
    fg_h = foreground.height,
))]
pub fn composite_over_par(
    background: &mut ImageRgba,
    foreground: &ImageRgba,
    opacity: f32,
    offset: PixelOffset,
) -> LamellaResult<()> {
    let Some(o) = checked_overlap(background, foreground, offset)? else {
        return Ok(());
    };

    let bg_stride = background.stride();
    let fg_stride = foreground.stride();
    let region = &mut background.data[o.bg_y0 * bg_stride..(o.bg_y0 + o.rows) * bg_stride];
    region
        .par_chunks_exact_mut(bg_stride)
        .enumerate()
        .for_each(|(row, bg_row)| {
            let fg_start = (o.fg_y0 + row) * fg_stride + o.fg_x0 * 4;
            blend_row(
                &mut bg_row[o.bg_x0 * 4..(o.bg_x0 + o.cols) * 4],
                &foreground.data[fg_start..fg_start + o.cols * 4],
                opacity,
            );
        });
    Ok(())
}

struct Overlap {
    bg_x0: usize,
    bg_y0: usize,
    fg_x0: usize,
    fg_y0: usize,
    cols: usize,
    rows: usize,
}

fn checked_overlap(
    background: &ImageRgba,
    foreground: &ImageRgba,
    offset: PixelOffset,
) -> LamellaResult<Option<Overlap>> {
    background.check_buffer("composite background")?;
    foreground.check_buffer("composite foreground")?;

    let x0 = i64::from(offset.x).max(0);
    let y0 = i64::from(offset.y).max(0);
    let x1 = (i64::from(offset.x) + i64::from(foreground.width)).min(i64::from(background.width));
    let y1 = (i64::from(offset.y) + i64::from(foreground.height)).min(i64::from(background.height));
    if x0 >= x1 || y0 >= y1 {
        return Ok(None);
    }

    Ok(Some(Overlap {
        bg_x0: x0 as usize,
        bg_y0: y0 as usize,
        fg_x0: (x0 - i64::from(offset.x)) as usize,
        fg_y0: (y0 - i64::from(offset.y)) as usize,
        cols: (x1 - x0) as usize,
        rows: (y1 - y0) as usize,
    }))
}

#[cfg(test)]
#[path = "../../tests/unit/composite/blit.rs"]
mod tests;
