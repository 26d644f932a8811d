// Adapters layer: concrete implementations for external systems (the three
// biodiversity providers plus the terminal presentation sink).

pub mod gbif;
pub mod inaturalist;
pub mod terminal;
pub mod wikipedia;
