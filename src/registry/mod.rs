/// Registry core - domain model of the relief registry and the read-through view
pub mod domain;
pub mod view;
