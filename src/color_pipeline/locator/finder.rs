use crate::color_pipeline::common::error::Result;

pub trait PatternLocator {
    fn locate_field(&self, buffer: &[u8]) -> Result<usize>;
}
