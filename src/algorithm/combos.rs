// Búsqueda de combinaciones de secciones que suman exactamente un objetivo
// de créditos, sin títulos repetidos ni choques de horario.
//
// Estrategia: backtracking en profundidad sobre un pool acotado y ordenado
// por facilidad. El índice solo avanza, así se generan combinaciones (no
// permutaciones) y no hay resultados simétricos duplicados. La poda y el
// chequeo de cancelación están centralizados en un único marco explícito
// (índice, suma acumulada, selección actual).

use std::collections::BTreeSet;
use std::sync::atomic::{AtomicBool, Ordering};

use log::debug;

use crate::algorithm::conflict::conflict_with_policy;
use crate::algorithm::recommend::ease_ordering;
use crate::models::{Catalog, Combination, CourseSection, EngineConfig, UnparsedTimePolicy};

/// Cómo terminó la búsqueda. Los resultados parciales se conservan siempre.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
pub enum SearchStatus {
    /// Se juntaron K combinaciones y la búsqueda cortó ahí.
    FoundEnough,
    /// Se agotó el espacio de búsqueda (incluye peticiones infactibles).
    PoolExhausted,
    /// El host pidió cancelar; la bandera se consulta en cada paso.
    Cancelled,
}

#[derive(Debug, Clone, serde::Serialize)]
pub struct ComboOutcome {
    pub combinations: Vec<Combination>,
    pub status: SearchStatus,
}

impl ComboOutcome {
    fn empty(status: SearchStatus) -> Self {
        ComboOutcome { combinations: Vec::new(), status }
    }
}

/// Petición de combinaciones, con la misma forma que el JSON del front:
/// objetivo de créditos y subcadenas de títulos que deben aparecer en toda
/// combinación devuelta.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct CombinationRequest {
    pub target_credits: u32,
    #[serde(default)]
    pub desired_titles: Vec<String>,
}

struct Dfs<'a, 'c> {
    pool: &'c [&'a CourseSection],
    /// suffix_min[i] = crédito mínimo entre pool[i..]; para la poda
    /// "ni el curso más barato restante alcanza el objetivo exacto".
    suffix_min: &'c [u32],
    target: u32,
    cap: usize,
    policy: UnparsedTimePolicy,
    cancel: &'c AtomicBool,
    results: Vec<Vec<&'a CourseSection>>,
    cancelled: bool,
}

impl<'a> Dfs<'a, '_> {
    /// Devuelve true cuando hay que detener toda la búsqueda (cupo K
    /// alcanzado o cancelación cooperativa).
    fn run(&mut self, idx: usize, sum: u32, chosen: &mut Vec<&'a CourseSection>) -> bool {
        if self.cancel.load(Ordering::Relaxed) {
            self.cancelled = true;
            return true;
        }
        if sum == self.target {
            self.results.push(chosen.clone());
            return self.results.len() >= self.cap;
        }
        if sum > self.target || idx >= self.pool.len() {
            return false;
        }
        if sum.saturating_add(self.suffix_min[idx]) > self.target {
            return false;
        }

        // rama 1: incluir pool[idx] si no repite título ni choca con lo elegido
        let cand = self.pool[idx];
        let usable = !chosen.iter().any(|c| c.title == cand.title)
            && !chosen
                .iter()
                .any(|c| conflict_with_policy(&c.slots, &cand.slots, self.policy));
        if usable {
            chosen.push(cand);
            if self.run(idx + 1, sum + cand.credit, chosen) {
                return true;
            }
            chosen.pop();
        }
        // rama 2: saltarlo
        self.run(idx + 1, sum, chosen)
    }
}

/// Pool de candidatos: solo categorías combinables (교양 / 일반선택) con
/// créditos dentro del rango configurado, ordenado por facilidad y acotado.
fn build_pool<'a>(catalog: &'a Catalog, cfg: &EngineConfig) -> Vec<&'a CourseSection> {
    let mut pool: Vec<&CourseSection> = catalog
        .sections
        .iter()
        .filter(|s| s.category_kind.is_combinable())
        .filter(|s| (cfg.pool_credit_min..=cfg.pool_credit_max).contains(&s.credit))
        .collect();
    pool.sort_by(|a, b| ease_ordering(a, b));
    pool.truncate(cfg.pool_cap);
    pool
}

/// Puntaje de una combinación ya completa:
/// 2·(miembros S/U) + 0.2·(slots distintos ocupados) − 0.1·(suma de llenado).
fn combination_score(members: &[&CourseSection]) -> f64 {
    let pass_fail = members.iter().filter(|c| c.pass_fail).count() as f64;
    let slots: BTreeSet<&String> = members.iter().flat_map(|c| c.slots.iter()).collect();
    let crowding: f64 = members.iter().map(|c| c.crowding_ratio()).sum();
    2.0 * pass_fail + 0.2 * slots.len() as f64 - 0.1 * crowding
}

/// Siembra los cursos deseados (subcadenas de título, sin distinguir
/// mayúsculas) tomando el primer miembro del pool que calce y respete las
/// reglas de duplicado/choque. None = petición infactible.
fn seed_desired<'a>(
    pool: &[&'a CourseSection],
    desired_titles: &[String],
    policy: UnparsedTimePolicy,
) -> Option<(Vec<&'a CourseSection>, u32)> {
    let mut chosen: Vec<&CourseSection> = Vec::new();
    let mut sum = 0u32;
    for want in desired_titles {
        let want_lower = want.trim().to_lowercase();
        if want_lower.is_empty() {
            continue;
        }
        let found = pool.iter().copied().find(|s| {
            s.title.to_lowercase().contains(&want_lower)
                && !chosen.iter().any(|c| c.title == s.title)
                && !chosen
                    .iter()
                    .any(|c| conflict_with_policy(&c.slots, &s.slots, policy))
        })?;
        sum += found.credit;
        chosen.push(found);
    }
    Some((chosen, sum))
}

/// Punto de entrada de la búsqueda de combinaciones. Función pura de
/// (snapshot, petición, configuración): dos llamadas idénticas devuelven
/// exactamente la misma lista ordenada — acá no hay aleatoriedad permitida.
///
/// Peticiones infactibles (objetivo fuera de rango, deseados que ya exceden
/// el objetivo o no existen en el pool) devuelven vacío con estado
/// `PoolExhausted`: es un resultado normal, no un error.
pub fn find_combinations(
    catalog: &Catalog,
    req: &CombinationRequest,
    cfg: &EngineConfig,
    cancel: &AtomicBool,
) -> ComboOutcome {
    if req.target_credits < cfg.min_target || req.target_credits > cfg.max_target {
        debug!("objetivo {} fuera de rango, resultado vacío", req.target_credits);
        return ComboOutcome::empty(SearchStatus::PoolExhausted);
    }

    let pool = build_pool(catalog, cfg);
    debug!("pool de combinaciones: {} candidatos", pool.len());

    let Some((mut chosen, seeded_sum)) = seed_desired(&pool, &req.desired_titles, cfg.unparsed_policy)
    else {
        return ComboOutcome::empty(SearchStatus::PoolExhausted);
    };
    if seeded_sum > req.target_credits {
        debug!(
            "los deseados suman {} > objetivo {}, resultado vacío",
            seeded_sum, req.target_credits
        );
        return ComboOutcome::empty(SearchStatus::PoolExhausted);
    }

    let mut suffix_min = vec![u32::MAX; pool.len() + 1];
    for i in (0..pool.len()).rev() {
        suffix_min[i] = suffix_min[i + 1].min(pool[i].credit);
    }

    let mut dfs = Dfs {
        pool: &pool,
        suffix_min: &suffix_min,
        target: req.target_credits,
        cap: cfg.combo_cap,
        policy: cfg.unparsed_policy,
        cancel,
        results: Vec::new(),
        cancelled: false,
    };
    dfs.run(0, seeded_sum, &mut chosen);

    let status = if dfs.cancelled {
        SearchStatus::Cancelled
    } else if dfs.results.len() >= cfg.combo_cap {
        SearchStatus::FoundEnough
    } else {
        SearchStatus::PoolExhausted
    };

    let mut combinations: Vec<Combination> = dfs
        .results
        .iter()
        .map(|members| Combination {
            score: combination_score(members),
            courses: members.iter().map(|c| (*c).clone()).collect(),
        })
        .collect();
    combinations.sort_by(|a, b| b.score.total_cmp(&a.score));
    combinations.truncate(cfg.combo_cap);

    debug!(
        "búsqueda terminada: {} combinaciones, estado {:?}",
        combinations.len(),
        status
    );
    ComboOutcome { combinations, status }
}
