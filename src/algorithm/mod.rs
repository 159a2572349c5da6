// Algoritmos del motor: parseo de horarios, choques, puntuación,
// listas de recomendación, búsqueda por palabra clave y combinaciones.

pub mod combos;
pub mod conflict;
pub mod recommend;
pub mod scoring;
pub mod search;
pub mod timeslot;
