//! Transformer oil-test records.
//!
//! A record screen with search, paging and a one-field create/edit form.
//!
//! ```text
//! cargo run --example transformer_records
//! PAGINATE_LOG=paginate.log RUST_LOG=bubbletea_paginate=debug cargo run --example transformer_records
//! ```

use bubbletea_paginate::key::{self, KeyMap};
use bubbletea_paginate::prelude::*;
use bubbletea_rs::{Cmd, KeyMsg, Model, Msg, Program};
use std::fmt;
use std::fs::File;
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

const SUBSTATIONS: [&str; 4] = ["Northgate", "Riverside", "Hillcrest", "Harbor"];

#[derive(Debug, Clone)]
struct OilTest {
    id: String,
    transformer: String,
    substation: String,
    breakdown_kv: f32,
    moisture_ppm: u32,
}

impl OilTest {
    fn sample(n: usize) -> Self {
        Self {
            id: format!("OT-{:04}", n),
            transformer: format!("TR-{}", 100 + n % 17),
            substation: SUBSTATIONS[n % SUBSTATIONS.len()].to_string(),
            breakdown_kv: 38.0 + (n % 9) as f32 * 2.5,
            moisture_ppm: 8 + (n * 7 % 25) as u32,
        }
    }
}

impl fmt::Display for OilTest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} on {} ({})", self.id, self.transformer, self.substation)
    }
}

impl Record for OilTest {
    fn id(&self) -> String {
        self.id.clone()
    }

    fn filter_value(&self) -> String {
        format!("{} {} {}", self.id, self.transformer, self.substation)
    }

    fn cells(&self) -> Vec<String> {
        vec![
            self.id.clone(),
            self.transformer.clone(),
            self.substation.clone(),
            format!("{:.1}", self.breakdown_kv),
            self.moisture_ppm.to_string(),
        ]
    }

    fn missing_required_fields(&self) -> Vec<&'static str> {
        if self.transformer.trim().is_empty() {
            vec!["transformer"]
        } else {
            Vec::new()
        }
    }
}

struct FormKeys {
    save: Binding,
    cancel: Binding,
}

impl Default for FormKeys {
    fn default() -> Self {
        Self {
            save: key::new_binding(vec![
                key::with_keys_str(&["enter"]),
                key::with_help("enter", "save"),
            ]),
            cancel: key::new_binding(vec![
                key::with_keys_str(&["esc"]),
                key::with_help("esc", "cancel"),
            ]),
        }
    }
}

impl KeyMap for FormKeys {
    fn short_help(&self) -> Vec<&Binding> {
        vec![&self.save, &self.cancel]
    }

    fn full_help(&self) -> Vec<Vec<&Binding>> {
        vec![self.short_help()]
    }
}

struct App {
    screen: Screen<OilTest>,
    transformer: Search,
    form_keys: FormKeys,
    form_help: HelpModel,
    next_id: usize,
}

impl App {
    fn editing(&self) -> bool {
        matches!(self.screen.modal(), ModalMode::Create | ModalMode::Edit(_))
    }

    fn open_form(&mut self) {
        let value = self
            .screen
            .edit_target()
            .map(|record| record.transformer)
            .unwrap_or_default();
        self.transformer.set_value(&value);
        self.transformer.focus();
    }

    fn close_form(&mut self) {
        self.transformer.blur();
        self.transformer.reset();
    }

    fn save_form(&mut self) {
        let record = match self.screen.edit_target() {
            Some(existing) => OilTest {
                transformer: self.transformer.value().trim().to_string(),
                ..existing
            },
            None => OilTest {
                transformer: self.transformer.value().trim().to_string(),
                ..OilTest::sample(self.next_id)
            },
        };
        let creating = self.screen.modal() == &ModalMode::Create;

        // a failed submit leaves the form open and the error in the status line
        if self.screen.submit(record).is_ok() {
            if creating {
                self.next_id += 1;
            }
            self.close_form();
        }
    }

    fn update_form(&mut self, msg: &Msg, key_msg: &KeyMsg) -> Option<Cmd> {
        if self.form_keys.save.matches(key_msg) {
            self.save_form();
        } else if self.form_keys.cancel.matches(key_msg) {
            self.screen.close_modal();
            self.close_form();
        } else {
            self.transformer.update(msg);
        }
        None
    }
}

impl Model for App {
    fn init() -> (Self, Option<Cmd>) {
        let records: Vec<OilTest> = (1..=57).map(OilTest::sample).collect();
        let next_id = records.len() + 1;
        let columns = vec![
            Column::new("Test").with_width(8),
            Column::new("Transformer").with_width(12),
            Column::new("Substation").with_width(10),
            Column::new("kV").with_width(5),
            Column::new("H2O ppm").with_width(7),
        ];

        let mut screen = Screen::new(
            "Transformer oil tests",
            columns,
            InMemoryRepository::new(records),
        );
        screen.help.width = 80;

        let mut transformer = Search::new();
        transformer.prompt = "Transformer: ".to_string();
        transformer.placeholder = "TR-000".to_string();

        (
            Self {
                screen,
                transformer,
                form_keys: FormKeys::default(),
                form_help: HelpModel::new(),
                next_id,
            },
            None,
        )
    }

    fn update(&mut self, msg: Msg) -> Option<Cmd> {
        let key_msg = msg.downcast_ref::<KeyMsg>()?;

        if self.editing() {
            return self.update_form(&msg, key_msg);
        }

        let cmd = self.screen.update(&msg);
        if self.editing() {
            self.open_form();
        }
        cmd
    }

    fn view(&self) -> String {
        let mut view = self.screen.view();
        if self.editing() {
            view.push_str("\n\n");
            view.push_str(&self.transformer.view());
            view.push_str("\n\n");
            view.push_str(&self.form_help.view(&self.form_keys));
        }
        view
    }
}

fn init_tracing() -> Result<(), Box<dyn std::error::Error>> {
    // the terminal belongs to the UI, so logs only go to a file
    let Some(path) = std::env::var_os("PAGINATE_LOG") else {
        return Ok(());
    };
    let file = File::create(path)?;
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug")),
        )
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();
    Ok(())
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing()?;

    let program = Program::<App>::builder().alt_screen(true).build()?;
    program.run().await?;

    Ok(())
}
