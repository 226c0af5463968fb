pub mod header;
pub mod draw_toolbar;
pub mod parcel_list;
pub mod row_list;
pub mod meta_editor;
pub mod overlay_status;
