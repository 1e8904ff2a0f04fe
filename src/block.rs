//! Hierarchical document blocks
//!
//! A [`Block`] is a rectangle of a page image plus any number of named child
//! trees ("Lines", "Characters", ...). Every block of a tree shares the page
//! image and its ink mask, which is binarized once on first use, so a
//! character block sees exactly the pixels its page sees.

use std::collections::BTreeMap;
use std::sync::{Arc, OnceLock};

use image::GrayImage;

use crate::contours::{find_components, Connectivity};
use crate::geometry::{compare_from, passes_min_or, Direction, Rect};
use crate::image_impl::Image;
use crate::preprocess::{binarize, mask_to_bw};

#[derive(Clone, Debug)]
pub struct Block {
    page: Arc<Image>,
    page_mask: Arc<OnceLock<GrayImage>>,
    rect: Rect,
    trees: BTreeMap<String, Vec<Block>>,
}

impl Block {
    /// Root block covering a whole image.
    pub fn new(image: Image) -> Self {
        Self::from_shared(Arc::new(image))
    }

    pub fn from_shared(page: Arc<Image>) -> Self {
        let rect = page.bounds();
        Self {
            page,
            page_mask: Arc::new(OnceLock::new()),
            rect,
            trees: BTreeMap::new(),
        }
    }

    /// Position in page coordinates.
    pub fn rect(&self) -> Rect {
        self.rect
    }

    pub fn width(&self) -> u32 {
        self.rect.width
    }

    pub fn height(&self) -> u32 {
        self.rect.height
    }

    fn page_mask(&self) -> &GrayImage {
        self.page_mask.get_or_init(|| binarize(&self.page.to_gray8()))
    }

    /// Ink mask of this block (255 = ink).
    pub fn ink_mask(&self) -> GrayImage {
        let r = self.rect;
        image::imageops::crop_imm(self.page_mask(), r.x, r.y, r.width, r.height).to_image()
    }

    pub fn get_gray(&self) -> Image {
        Image::from_gray(self.page.crop(&self.rect).to_gray8())
    }

    pub fn get_rgb(&self) -> Image {
        Image::from_rgb(self.page.crop(&self.rect).to_rgb8())
    }

    /// Black and white rendition: black ink on a white background.
    pub fn get_bw(&self) -> Image {
        Image::from_gray(mask_to_bw(&self.ink_mask()))
    }

    /// Appends a child covering `rect` (page coordinates) to `tree`.
    pub fn push_child(&mut self, tree: &str, rect: Rect) -> &mut Block {
        let child = Block {
            page: Arc::clone(&self.page),
            page_mask: Arc::clone(&self.page_mask),
            rect,
            trees: BTreeMap::new(),
        };
        let children = self.trees.entry(tree.to_string()).or_default();
        children.push(child);
        let last = children.len() - 1;
        &mut children[last]
    }

    pub fn nb_children(&self, tree: &str) -> usize {
        self.trees.get(tree).map_or(0, Vec::len)
    }

    pub fn child(&self, tree: &str, index: usize) -> Option<&Block> {
        self.trees.get(tree).and_then(|c| c.get(index))
    }

    pub fn children(&self, tree: &str) -> &[Block] {
        match self.trees.get(tree) {
            Some(children) => children,
            None => &[],
        }
    }

    pub fn children_mut(&mut self, tree: &str) -> &mut [Block] {
        match self.trees.get_mut(tree) {
            Some(children) => children,
            None => &mut [],
        }
    }

    pub fn remove_tree(&mut self, tree: &str) -> Option<Vec<Block>> {
        self.trees.remove(tree)
    }

    /// Replaces `tree` with one child per connected ink component.
    pub fn extract_cc(&mut self, tree: &str, connectivity: Connectivity) {
        let components = find_components(&self.ink_mask(), connectivity);
        self.trees.remove(tree);
        for component in components {
            let rect = component.bounds.offset_by(&self.rect);
            self.push_child(tree, rect);
        }
    }

    /// Drops children narrower than `min_width` or shorter than `min_height`.
    pub fn filter_min_or(&mut self, tree: &str, min_width: u32, min_height: u32) {
        if let Some(children) = self.trees.get_mut(tree) {
            children.retain(|c| passes_min_or(&c.rect, min_width, min_height));
        }
    }

    /// Sorts children starting from `direction` (e.g. `Left` = left to right).
    pub fn sort_tree(&mut self, tree: &str, direction: Direction) {
        if let Some(children) = self.trees.get_mut(tree) {
            children.sort_by(|a, b| compare_from(direction, &a.rect, &b.rect));
        }
    }
}
