pub mod api_key_name;
