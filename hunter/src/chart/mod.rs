pub mod sky_map;
