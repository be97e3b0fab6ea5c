// src/main.rs
//
// Calculatrice — point d’entrée NATIF + WEB (WASM)
// ------------------------------------------------
// But:
// - NATIF (Linux/Windows/macOS) : CLI (clap) + config (TOML) + journal (tracing)
//     - `calculatrice "1+2*3"`  : évaluation sans fenêtre, résultat sur stdout
//     - `calculatrice`          : fenêtre eframe::run_native
// - WEB  (wasm32)               : eframe::WebRunner + WebOptions + <canvas>
//
// Côté WEB (WASM) : ton index.html doit contenir un canvas :
//   <canvas id="the_canvas_id"></canvas>

#![cfg_attr(target_arch = "wasm32", allow(unused_imports))]

mod app;
#[cfg(not(target_arch = "wasm32"))]
mod config;
mod noyau;

use app::AppCalc;

/// Titre unique (natif + web).
const TITRE_APP: &str = "Calculatrice";

/* ------------------------ Entrée NATIF (PC) ------------------------ */

#[cfg(not(target_arch = "wasm32"))]
mod natif {
    use std::path::PathBuf;
    use std::process::ExitCode;

    use anyhow::Context;
    use clap::Parser;
    use eframe::egui;
    use tracing::info;
    use tracing_subscriber::EnvFilter;

    use super::{config, noyau, AppCalc, TITRE_APP};

    #[derive(Parser, Debug)]
    #[command(name = "calculatrice", version, about = "Calculatrice infixe (+ - * / ^ %, parenthèses)")]
    pub struct Cli {
        /// Expression à évaluer sans ouvrir la fenêtre ("-5+3" accepté)
        #[arg(allow_hyphen_values = true)]
        pub expression: Option<String>,

        /// Affiche aussi la démarche (normalisée, jetons, RPN)
        #[arg(long)]
        pub demarche: bool,

        /// Fichier de configuration TOML
        #[arg(long, value_name = "FICHIER")]
        pub config: Option<PathBuf>,

        /// Filtre du journal (ex: "debug", "calculatrice_infixe=trace")
        #[arg(long, value_name = "FILTRE")]
        pub log: Option<String>,
    }

    /// RUST_LOG > --log > config.
    fn init_journal(filtre: &str) {
        let filtre = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filtre));
        tracing_subscriber::fmt()
            .with_env_filter(filtre)
            .with_writer(std::io::stderr)
            .init();
    }

    pub fn run() -> anyhow::Result<ExitCode> {
        let cli = Cli::parse();

        let config =
            config::charger(cli.config.as_deref()).context("chargement de la configuration")?;
        init_journal(cli.log.as_deref().unwrap_or(&config.journal));

        if let Some(expr) = cli.expression.as_deref() {
            return Ok(evaluer_en_ligne(expr, cli.demarche));
        }

        info!(
            largeur = config.fenetre.largeur,
            hauteur = config.fenetre.hauteur,
            "ouverture de la fenêtre"
        );
        let options = eframe::NativeOptions {
            viewport: egui::ViewportBuilder::default()
                .with_title(TITRE_APP)
                .with_inner_size([config.fenetre.largeur, config.fenetre.hauteur])
                .with_min_inner_size([300.0, 460.0]),
            ..Default::default()
        };

        let demarche_ouverte = config.demarche_ouverte;
        eframe::run_native(
            TITRE_APP,
            options,
            Box::new(move |_cc| Ok(Box::new(AppCalc::new(demarche_ouverte)))),
        )
        .map_err(|e| anyhow::anyhow!("eframe : {e}"))?;

        Ok(ExitCode::SUCCESS)
    }

    /// Mode sans fenêtre : résultat sur stdout, erreur sur stderr (code 1).
    fn evaluer_en_ligne(expr: &str, demarche: bool) -> ExitCode {
        let (issue, d) = if demarche {
            match noyau::calculer_detaille(Some(expr)) {
                Ok((valeur, d)) => (Ok(valeur), Some(d)),
                Err(e) => (Err(e), None),
            }
        } else {
            (noyau::calculer(Some(expr)), None)
        };

        if issue.is_err() {
            eprintln!("{}", noyau::format_issue(&issue));
            return ExitCode::FAILURE;
        }

        println!("{}", noyau::format_issue(&issue));
        if let Some(d) = d {
            println!("normalisée : {}", d.normalisee);
            println!("jetons     : {}", d.jetons);
            println!("rpn        : {}", d.rpn);
        }
        ExitCode::SUCCESS
    }

}

#[cfg(not(target_arch = "wasm32"))]
fn main() -> anyhow::Result<std::process::ExitCode> {
    natif::run()
}

/* ------------------------ Entrée WEB (WASM) ------------------------ */

#[cfg(target_arch = "wasm32")]
fn main() {
    // En wasm32, le démarrage réel passe par `start()` (wasm_bindgen).
    // On laisse main() vide pour rester clair.
}

#[cfg(target_arch = "wasm32")]
mod web {
    use super::{AppCalc, TITRE_APP};

    use wasm_bindgen::JsCast;
    use web_sys::{window, HtmlCanvasElement};

    /// ID du canvas attendu dans index.html.
    const CANVAS_ID: &str = "the_canvas_id";

    /// Point d’entrée automatique au chargement de la page.
    /// - Fixe le titre de l’onglet (document.title)
    /// - Récupère le <canvas id="the_canvas_id">
    /// - Démarre eframe WebRunner dessus
    #[wasm_bindgen::prelude::wasm_bindgen(start)]
    pub async fn start() -> Result<(), wasm_bindgen::JsValue> {
        let w = window().ok_or_else(|| js_err("window() indisponible"))?;
        let d = w
            .document()
            .ok_or_else(|| js_err("document() indisponible"))?;

        d.set_title(TITRE_APP);

        let el = d
            .get_element_by_id(CANVAS_ID)
            .ok_or_else(|| js_err("canvas introuvable (id incorrect dans index.html)"))?;

        let canvas: HtmlCanvasElement = el
            .dyn_into::<HtmlCanvasElement>()
            .map_err(|_| js_err("l’élément trouvé n’est pas un <canvas>"))?;

        let web_options = eframe::WebOptions::default();

        eframe::WebRunner::new()
            .start(
                canvas,
                web_options,
                Box::new(|_cc| Ok(Box::<AppCalc>::default())),
            )
            .await
    }

    fn js_err(msg: &str) -> wasm_bindgen::JsValue {
        wasm_bindgen::JsValue::from_str(msg)
    }
}
