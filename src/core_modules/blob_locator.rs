// THEORY:
// The `BlobLocator` is the engine of the detection layer. It implements a
// "Threshold and Region Growing" algorithm: select every pixel at or above
// the brightness threshold, group the selected pixels into connected regions,
// and report the centroid of the single largest region.
//
// Its purpose is to turn a raw brightness frame into at most one sub-pixel
// wand-tip position per frame.
//
// Key architectural principles & algorithm steps:
// 1.  **Thresholding**: Only pixels `>= threshold` participate. An IR
//     reflection off the wand tip saturates a small cluster of pixels; the
//     rest of a darkened room sits far below the threshold.
// 2.  **Region Growing**: Scanning in raster order, every unvisited bright
//     pixel seeds a breadth-first search over its 8-connected bright
//     neighbors, producing one connected region per cluster of light.
// 3.  **Largest Region Wins**: The centroid of *all* bright pixels would be
//     pulled off-target by stray reflections elsewhere in the frame. Taking
//     the largest region by pixel count rejects isolated noise pixels when a
//     real reflection is present. Ties go to the region seeded first in
//     raster-scan order, which the strict `>` comparison yields for free.
// 4.  **Stateless Utility**: `locate` is a pure function of the current frame
//     and threshold. It has no memory of previous frames; track continuity
//     lives one layer up, in the `WandTracker`.

use crate::core_modules::frame::Frame;
use crate::core_modules::path::Point;

/// The result of searching one frame for the wand tip: a sub-pixel centroid,
/// or `None` when no pixel reaches the threshold. "No blob" is the ordinary
/// signal that drives track loss, never an error.
pub type Observation = Option<Point>;

pub mod blob_locator {
    use super::*;

    /// Offsets of the 8-connected neighborhood.
    const NEIGHBORS: [(i32, i32); 8] = [
        (-1, -1),
        (0, -1),
        (1, -1),
        (-1, 0),
        (1, 0),
        (-1, 1),
        (0, 1),
        (1, 1),
    ];

    /// Finds the wand tip in a single frame.
    ///
    /// Returns the centroid of the largest 8-connected region of pixels at or
    /// above `threshold`, or `None` when the frame has no such pixel.
    pub fn locate(frame: &Frame, threshold: u8) -> Observation {
        let width = frame.width() as usize;
        let height = frame.height() as usize;
        if width == 0 || height == 0 {
            return None;
        }

        let mut visited = vec![false; width * height];
        let mut best: Option<RegionSummary> = None;

        // Raster scan; each unvisited bright pixel seeds one region.
        for y in 0..height {
            for x in 0..width {
                let index = y * width + x;
                if visited[index] || frame.pixels()[index] < threshold {
                    continue;
                }

                let region = grow_region(frame, threshold, &mut visited, x, y);

                // Strict `>` keeps the earlier-seeded region on a tie.
                if best.as_ref().map_or(true, |b| region.pixel_count > b.pixel_count) {
                    best = Some(region);
                }
            }
        }

        best.map(|region| {
            Point::new(
                region.sum_x / region.pixel_count as f64,
                region.sum_y / region.pixel_count as f64,
            )
        })
    }

    /// Accumulated properties of one connected bright region.
    struct RegionSummary {
        pixel_count: usize,
        sum_x: f64,
        sum_y: f64,
    }

    /// Performs a breadth-first search over 8-connected bright pixels,
    /// starting from an unvisited seed, and summarizes the region it covers.
    fn grow_region(
        frame: &Frame,
        threshold: u8,
        visited: &mut [bool],
        seed_x: usize,
        seed_y: usize,
    ) -> RegionSummary {
        let width = frame.width() as i32;
        let height = frame.height() as i32;

        let mut summary = RegionSummary {
            pixel_count: 0,
            sum_x: 0.0,
            sum_y: 0.0,
        };

        let mut queue: Vec<(usize, usize)> = vec![(seed_x, seed_y)];
        visited[seed_y * width as usize + seed_x] = true;

        while let Some((x, y)) = queue.pop() {
            summary.pixel_count += 1;
            summary.sum_x += x as f64;
            summary.sum_y += y as f64;

            for (dx, dy) in &NEIGHBORS {
                let nx = x as i32 + dx;
                let ny = y as i32 + dy;

                if nx >= 0 && nx < width && ny >= 0 && ny < height {
                    let nx_u = nx as usize;
                    let ny_u = ny as usize;
                    let index = ny_u * width as usize + nx_u;

                    if !visited[index] && frame.pixels()[index] >= threshold {
                        visited[index] = true;
                        queue.push((nx_u, ny_u));
                    }
                }
            }
        }

        summary
    }
}
