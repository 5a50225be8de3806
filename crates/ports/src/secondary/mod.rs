pub mod id_provider;
