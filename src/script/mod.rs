//! Adapters for the liquid-handler script stages. The planner never reads stock
//! locations; these only resolve a finished plan against a source inventory.

pub mod inventory;
pub mod spotting;
pub mod transfers;

pub use inventory::{CsvInventory, SourceInventory, StockLocation};
pub use spotting::{spotting_groups, SpottingGroup};
pub use transfers::{clip_transfers, ClipTransfer};
