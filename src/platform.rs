use crate::app::{App, AppResult};
use crate::config::AtomConfig;
use crate::physics::elements::PeriodicTable;

/// Native front-end: build one atom, run it for a number of ticks and report.
#[cfg(not(target_arch = "wasm32"))]
pub mod native {
    use super::*;
    use crate::physics::particle::Particle;
    use clap::Parser;
    use std::path::PathBuf;

    #[derive(Parser, Debug)]
    #[command(name = "atom-builder")]
    #[command(author, version, about = "Generate an atom model and step its electron orbits")]
    pub struct Cli {
        /// Periodic table JSON keyed by atomic number (defaults to the bundled table)
        #[arg(long)]
        pub data: Option<PathBuf>,

        /// Atomic number to select
        #[arg(short, long, default_value = "1")]
        pub element: u32,

        /// Simulation ticks to run after selecting
        #[arg(short, long, default_value = "60")]
        pub ticks: u32,

        /// Fixed seed for nucleon placement
        #[arg(long)]
        pub seed: Option<u64>,

        /// Atom geometry config (JSON)
        #[arg(long)]
        pub config: Option<PathBuf>,
    }

    pub fn start() -> AppResult<()> {
        env_logger::init();
        let cli = Cli::parse();

        let table = match &cli.data {
            Some(path) => PeriodicTable::load(path)?,
            None => PeriodicTable::bundled()?,
        };
        let mut config = match &cli.config {
            Some(path) => AtomConfig::load(path)?,
            None => AtomConfig::default(),
        };
        if let Some(seed) = cli.seed {
            config = config.with_seed(seed);
        }

        let mut app = App::initialize(table, config)?;
        app.click(cli.element)?;
        for _ in 0..cli.ticks {
            app.frame();
        }
        if app.atom().atomic_number() != cli.element {
            return Err(format!("Could not build an atom for Z={}", cli.element).into());
        }

        if let Some(facts) = app.facts() {
            println!("{}", serde_json::to_string_pretty(&facts)?);
        }

        let atom = app.atom();
        println!(
            "nucleus radius {:.3}, {} protons, {} neutrons, shells {:?}",
            atom.nucleus().radius(),
            atom.nucleus().proton_count(),
            atom.nucleus().neutron_count(),
            atom.distribution().occupancy()
        );
        for electron in atom.electrons() {
            let p = electron.position();
            println!(
                "shell {} {} angle {:>8.4} at ({:>7.3}, {:>7.3}, {:>7.3})",
                electron.shell_index,
                if electron.is_valence_shell { "valence" } else { "core   " },
                electron.angle,
                p.x,
                p.y,
                p.z
            );
        }

        Ok(())
    }
}

/// Browser front-end. The page fetches the dataset and renders; Rust owns
/// the atom state.
#[cfg(target_arch = "wasm32")]
pub mod web {
    use super::*;
    use crate::renderer::instance;
    use wasm_bindgen::prelude::*;

    #[wasm_bindgen(start)]
    pub fn start() {
        console_log::init_with_level(log::Level::Debug).expect("Couldn't initialize logger");
        console_error_panic_hook::set_once();
    }

    fn to_js<E: std::fmt::Display>(err: E) -> JsValue {
        JsValue::from_str(&err.to_string())
    }

    #[wasm_bindgen]
    pub struct AtomViewer {
        app: App,
    }

    #[wasm_bindgen]
    impl AtomViewer {
        #[wasm_bindgen(constructor)]
        pub fn new(dataset_json: &str, seed: Option<u64>) -> Result<AtomViewer, JsValue> {
            let table = PeriodicTable::from_json(dataset_json).map_err(to_js)?;
            let mut config = AtomConfig::default();
            if let Some(seed) = seed {
                config = config.with_seed(seed);
            }
            let app = App::initialize(table, config).map_err(to_js)?;
            Ok(AtomViewer { app })
        }

        pub fn select(&mut self, atomic_number: u32) -> Result<(), JsValue> {
            self.app.click(atomic_number).map_err(to_js)
        }

        pub fn frame(&mut self) {
            self.app.frame();
        }

        #[wasm_bindgen(js_name = atomicNumber)]
        pub fn atomic_number(&self) -> u32 {
            self.app.atom().atomic_number()
        }

        #[wasm_bindgen(js_name = nucleusYaw)]
        pub fn nucleus_yaw(elapsed_ms: f64) -> f32 {
            crate::simulation::atom::Atom::nucleus_yaw(elapsed_ms)
        }

        #[wasm_bindgen(js_name = shellRadii)]
        pub fn shell_radii(&self) -> Vec<f32> {
            self.app.atom().shell_radii().to_vec()
        }

        /// Packed `ParticleInstance` records, 16 bytes each.
        #[wasm_bindgen(js_name = instanceBytes)]
        pub fn instance_bytes(&self) -> Vec<u8> {
            instance::as_bytes(self.app.instances()).to_vec()
        }

        #[wasm_bindgen(js_name = layoutJson)]
        pub fn layout_json(&self) -> Result<String, JsValue> {
            serde_json::to_string(self.app.placements()).map_err(to_js)
        }

        #[wasm_bindgen(js_name = factsJson)]
        pub fn facts_json(&self) -> Result<String, JsValue> {
            serde_json::to_string(&self.app.facts()).map_err(to_js)
        }
    }
}
