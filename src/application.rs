pub mod push_soul_vectors;
