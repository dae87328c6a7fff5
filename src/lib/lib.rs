pub mod slot_cover;
