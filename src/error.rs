use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConstructError {
    OutOfMemory,
}

impl fmt::Display for ConstructError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConstructError::OutOfMemory => write!(f, "failed to allocate address space"),
        }
    }
}

impl std::error::Error for ConstructError {}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadError {
    ImageTooLarge {
        region: &'static str,
        image_len: usize,
        region_capacity: usize,
    },
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoadError::ImageTooLarge {
                region,
                image_len,
                region_capacity,
            } => write!(
                f,
                "image of {image_len} bytes does not fit in {region} region ({region_capacity} bytes available)"
            ),
        }
    }
}

impl std::error::Error for LoadError {}
