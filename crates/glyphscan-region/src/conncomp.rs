//! Connected component analysis
//!
//! [`ComponentMap`] labels the foreground of a bitmap with 8-connectivity
//! in a single raster pass. Provisional labels are merged with a
//! union-find forest whose roots are always the smallest label of their
//! set, so compacting the roots in ascending order yields dense labels
//! `1..=N` ordered by the first pixel of each component in row-major scan.

use crate::error::{RegionError, RegionResult};
use glyphscan_core::{Bitmap, BitmapMut, Box};

/// Connectivity type for region traversal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ConnectivityType {
    /// 4-way connectivity (up, down, left, right)
    FourWay,
    /// 8-way connectivity (includes diagonals)
    #[default]
    EightWay,
}

/// One connected foreground region
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Component {
    /// Label of this component in the label grid (1-based)
    pub label: u32,
    /// Number of pixels in this component
    pub pixel_count: u32,
    /// Bounding box of this component
    pub bounds: Box,
}

/// Label grid plus component list of a bitmap.
///
/// Label `k` corresponds to `components()[k - 1]`; label 0 is background.
/// The map copies what it needs from its source and does not borrow it.
#[derive(Debug, Clone)]
pub struct ComponentMap {
    width: u32,
    height: u32,
    labels: Vec<u32>,
    components: Vec<Component>,
}

/// Already-visited neighbours in a top-down, left-to-right scan.
const PRIOR_NEIGHBOURS: [(i32, i32); 4] = [(-1, 0), (-1, -1), (0, -1), (1, -1)];

fn find_root(parent: &mut [u32], mut label: u32) -> u32 {
    while parent[label as usize] != label {
        let grand = parent[parent[label as usize] as usize];
        parent[label as usize] = grand;
        label = grand;
    }
    label
}

fn merge(parent: &mut [u32], a: u32, b: u32) -> u32 {
    let ra = find_root(parent, a);
    let rb = find_root(parent, b);
    let (lo, hi) = if ra <= rb { (ra, rb) } else { (rb, ra) };
    parent[hi as usize] = lo;
    lo
}

#[derive(Clone, Copy)]
struct Extent {
    min_x: i32,
    min_y: i32,
    max_x: i32,
    max_y: i32,
    count: u32,
}

impl Extent {
    const EMPTY: Extent = Extent {
        min_x: i32::MAX,
        min_y: i32::MAX,
        max_x: i32::MIN,
        max_y: i32::MIN,
        count: 0,
    };

    fn add(&mut self, x: i32, y: i32) {
        self.min_x = self.min_x.min(x);
        self.min_y = self.min_y.min(y);
        self.max_x = self.max_x.max(x);
        self.max_y = self.max_y.max(y);
        self.count += 1;
    }
}

impl ComponentMap {
    /// Label the 8-connected foreground components of `bm`.
    ///
    /// An all-background bitmap yields an empty map.
    ///
    /// # Errors
    ///
    /// Returns [`RegionError::AllocationFailed`] if the label grid cannot
    /// be reserved.
    pub fn new(bm: &Bitmap) -> RegionResult<Self> {
        let w = bm.width() as usize;
        let h = bm.height() as usize;
        let n = w * h;
        let mut labels = Vec::new();
        labels
            .try_reserve_exact(n)
            .map_err(|_| RegionError::AllocationFailed(n))?;
        labels.resize(n, 0u32);

        // parent[0] is a placeholder so provisional labels index directly
        let mut parent: Vec<u32> = vec![0];
        for y in 0..h {
            if !bm.row_has_foreground(y as i32) {
                continue;
            }
            for x in 0..w {
                if !bm.get(x as i32, y as i32) {
                    continue;
                }
                let mut current = 0u32;
                for (dx, dy) in PRIOR_NEIGHBOURS {
                    let nx = x as i32 + dx;
                    let ny = y as i32 + dy;
                    if nx < 0 || ny < 0 || nx as usize >= w {
                        continue;
                    }
                    let nl = labels[ny as usize * w + nx as usize];
                    if nl == 0 {
                        continue;
                    }
                    current = if current == 0 {
                        find_root(&mut parent, nl)
                    } else {
                        merge(&mut parent, current, nl)
                    };
                }
                if current == 0 {
                    current = parent.len() as u32;
                    parent.push(current);
                }
                labels[y * w + x] = current;
            }
        }

        // Roots are the minimum of their set and are visited before any
        // other member, so their dense label is always ready.
        let mut dense = vec![0u32; parent.len()];
        let mut count = 0u32;
        for l in 1..parent.len() as u32 {
            let root = find_root(&mut parent, l);
            if root == l {
                count += 1;
                dense[l as usize] = count;
            } else {
                dense[l as usize] = dense[root as usize];
            }
        }

        let mut extents = vec![Extent::EMPTY; count as usize];
        for y in 0..h {
            for x in 0..w {
                let idx = y * w + x;
                let provisional = labels[idx];
                if provisional == 0 {
                    continue;
                }
                let label = dense[provisional as usize];
                labels[idx] = label;
                extents[(label - 1) as usize].add(x as i32, y as i32);
            }
        }

        let components = extents
            .iter()
            .enumerate()
            .map(|(i, e)| Component {
                label: i as u32 + 1,
                pixel_count: e.count,
                bounds: Box::from_extent(e.min_x, e.min_y, e.max_x, e.max_y),
            })
            .collect();

        Ok(Self {
            width: bm.width(),
            height: bm.height(),
            labels,
            components,
        })
    }

    /// Width of the labeled bitmap.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Height of the labeled bitmap.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Label at `(x, y)`; 0 for background or out-of-range coordinates.
    pub fn label(&self, x: i32, y: i32) -> u32 {
        if x < 0 || y < 0 || x as u32 >= self.width || y as u32 >= self.height {
            return 0;
        }
        self.labels[y as usize * self.width as usize + x as usize]
    }

    /// Raw row-major label grid.
    pub fn label_grid(&self) -> &[u32] {
        &self.labels
    }

    /// Component at `index` (label `index + 1`).
    pub fn component(&self, index: usize) -> Option<&Component> {
        self.components.get(index)
    }

    /// All components in label order.
    pub fn components(&self) -> &[Component] {
        &self.components
    }

    /// Number of components.
    pub fn len(&self) -> usize {
        self.components.len()
    }

    /// True when the source bitmap had no foreground.
    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }

    /// Component indices ordered by pixel count, largest first.
    ///
    /// Components of equal size keep label order.
    pub fn largest_components(&self) -> Vec<usize> {
        let mut order: Vec<usize> = (0..self.components.len()).collect();
        order.sort_by(|&a, &b| {
            self.components[b]
                .pixel_count
                .cmp(&self.components[a].pixel_count)
        });
        order
    }

    /// Render one component alone on a bitmap of the source extent.
    ///
    /// # Errors
    ///
    /// Returns [`RegionError::ComponentOutOfRange`] if `index` is not a
    /// component index.
    pub fn to_bitmap_by_index(&self, index: usize) -> RegionResult<Bitmap> {
        let comp = self
            .components
            .get(index)
            .ok_or(RegionError::ComponentOutOfRange {
                index,
                len: self.components.len(),
            })?;
        let mut out = BitmapMut::new(self.width, self.height)?;
        self.paint(&mut out, comp);
        Ok(out.into())
    }

    /// Render the components whose bounding-box height lies in
    /// `[min_h, max_h]` and width in `[min_w, max_w]`.
    pub fn to_bitmap_by_size(
        &self,
        min_h: i32,
        max_h: i32,
        min_w: i32,
        max_w: i32,
    ) -> RegionResult<Bitmap> {
        self.to_bitmap_where(|c| {
            (min_h..=max_h).contains(&c.bounds.h) && (min_w..=max_w).contains(&c.bounds.w)
        })
    }

    /// Render every component accepted by `keep`.
    pub fn to_bitmap_where<F>(&self, mut keep: F) -> RegionResult<Bitmap>
    where
        F: FnMut(&Component) -> bool,
    {
        let mut out = BitmapMut::new(self.width, self.height)?;
        for comp in self.components.iter().filter(|c| keep(c)) {
            self.paint(&mut out, comp);
        }
        Ok(out.into())
    }

    fn paint(&self, out: &mut BitmapMut, comp: &Component) {
        let b = comp.bounds;
        for y in b.y..b.bottom() {
            for x in b.x..b.right() {
                if self.label(x, y) == comp.label {
                    out.set(x, y);
                }
            }
        }
    }
}
