// Biblioteca raíz del crate `sugang`.
// Motor de recomendación y combinación de secciones sobre el catálogo de un
// semestre: computación pura y síncrona, sin I/O ni estado compartido; la
// carga del catálogo y la presentación son responsabilidad del host.

pub mod algorithm;
pub mod catalog;
pub mod logging;
pub mod models;
