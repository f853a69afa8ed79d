pub mod contact_sheet;
pub mod sheet_to_png;

pub use contact_sheet::{ContactSheet, Panel};
pub use sheet_to_png::SheetRenderer;
