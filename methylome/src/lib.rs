pub mod cgmap;
pub mod context;
pub mod methylkit;
pub mod strand;

pub use cgmap::{CGmapRecord, CGMAP_FIELD_COUNT};
pub use context::DinucleotideContext;
pub use methylkit::{
    FormatOptions, MethylKitRecord, Percentage, DEFAULT_DECIMALS, MAX_DECIMALS, METHYLKIT_HEADER,
};
pub use strand::Strand;
