pub mod detail_sheet;
