// --- Recomendador de secciones - CLI de demostración ---
//
// Hace el papel del colaborador externo: carga el catálogo JSON, invoca cada
// punto de entrada del motor y imprime los rankings. El motor en sí no lee
// ficheros ni imprime nada.

use std::process::ExitCode;
use std::sync::atomic::AtomicBool;

use clap::Parser;
use rand::SeedableRng;
use rand::rngs::StdRng;

use sugang::algorithm::combos::{self, CombinationRequest};
use sugang::algorithm::recommend;
use sugang::algorithm::search::{self, SearchFilters};
use sugang::models::{Catalog, CourseSection, EngineConfig};

#[derive(Parser, Debug)]
#[command(author, version, about = "Recomendador de secciones y combinador de créditos")]
struct Cli {
    /// Catálogo JSON (array de registros con las claves originales)
    #[arg(
        short,
        long,
        default_value = concat!(env!("CARGO_MANIFEST_DIR"), "/data/lectures.json")
    )]
    catalog: String,

    /// Semilla del barajado de las listas Popular/Fácil (por defecto: entropía)
    #[arg(long)]
    seed: Option<u64>,

    /// Subcadena de título para la consulta de similares
    #[arg(long)]
    similar: Option<String>,

    /// Objetivo de créditos para la búsqueda de combinaciones
    #[arg(short, long)]
    target: Option<u32>,

    /// Subcadenas de títulos a forzar en cada combinación (repetible)
    #[arg(long)]
    desired: Vec<String>,

    /// Búsqueda por palabra clave sobre título/profesor
    #[arg(long)]
    query: Option<String>,
}

fn main() -> ExitCode {
    let debug_enabled = std::env::var("SUGANG_DEBUG").is_ok();
    sugang::logging::init_logger(debug_enabled);

    if let Err(e) = try_main() {
        eprintln!("Error: {e}");
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}

fn print_section(s: &CourseSection) {
    println!(
        "  {} — {} ({}학점, {}/{}명, {})",
        s.title, s.professor, s.credit, s.enrolled, s.capacity, s.raw_time
    );
}

fn try_main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let cfg = EngineConfig::default();

    let catalog = Catalog::load_json(&cli.catalog)?;
    log::info!("catálogo cargado: {} secciones", catalog.sections.len());

    let mut rng: StdRng = match cli.seed {
        Some(s) => StdRng::seed_from_u64(s),
        None => StdRng::from_entropy(),
    };

    println!("=== 인기강의 (populares) ===");
    for s in recommend::popular(&catalog, &cfg, &mut rng) {
        print_section(s);
    }

    println!("\n=== 꿀강의 (fáciles) ===");
    for s in recommend::easy(&catalog, &cfg, &mut rng) {
        print_section(s);
    }

    println!("\n=== 학년별 추천 교양 ===");
    for grade in 1..=4 {
        let picks = recommend::liberal_for_grade(&catalog, grade, &cfg);
        let titles: Vec<&str> = picks.iter().map(|s| s.title.as_str()).collect();
        println!("  {}학년: {}", grade, titles.join(" / "));
    }

    if let Some(ref q) = cli.query {
        println!("\n=== 검색: {q} ===");
        let outcome = search::search(&catalog, q, &SearchFilters::default());
        for s in &outcome.hits {
            print_section(s);
        }
        if let Some(sug) = outcome.suggestion {
            println!("  ¿Quiso decir: {sug}?");
        }
    }

    if let Some(ref q) = cli.similar {
        println!("\n=== 유사과목: {q} ===");
        match search::find_by_title(&catalog, q) {
            Some(base) => {
                for s in recommend::similar_to(&catalog, base, &cfg) {
                    print_section(s);
                }
            }
            None => match search::suggest_title(&catalog, q) {
                Some(sug) => println!("  sin resultados; ¿quiso decir: {sug}?"),
                None => println!("  sin resultados"),
            },
        }
    }

    if let Some(target) = cli.target {
        println!("\n=== 학점조합: {target}학점 ===");
        let req = CombinationRequest {
            target_credits: target,
            desired_titles: cli.desired.clone(),
        };
        // el CLI corre inline; un host concurrente compartiría esta bandera
        let cancel = AtomicBool::new(false);
        let outcome = combos::find_combinations(&catalog, &req, &cfg, &cancel);
        if outcome.combinations.is_empty() {
            println!("  sin combinaciones (estado {:?})", outcome.status);
        }
        for (i, combo) in outcome.combinations.iter().enumerate() {
            let titles: Vec<&str> = combo.courses.iter().map(|c| c.title.as_str()).collect();
            println!(
                "  조합 {}: {} ({}학점, score {:.2})",
                i + 1,
                titles.join(" / "),
                combo.credits(),
                combo.score
            );
        }
    }

    Ok(())
}
