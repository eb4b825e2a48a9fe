//! The command language — one line per command, editor `:` style.
//!
//! A line is split into whitespace-separated words; single or double quotes
//! group words (`origin="top right"`). A leading `:` is accepted and
//! ignored. Lines are parsed into a [`Command`] by [`parse_command`] and
//! run against a [`Store`] by [`execute`].
//!
//! # Commands
//!
//! | Command                        | Action                                         |
//! |--------------------------------|------------------------------------------------|
//! | `use <kind>`                   | Switch the active generator                    |
//! | `set <field>=<value>...`       | Patch the active generator                     |
//! | `show [kind]`                  | Print the CSS of the active or named generator |
//! | `json [kind]`                  | Print a configuration as JSON                  |
//! | `add`                          | Add a gradient stop or shadow layer            |
//! | `remove <id>`                  | Remove a gradient stop or shadow layer         |
//! | `stop <id> <field>=<value>...` | Update one gradient stop                       |
//! | `layer <id> <field>=<value>...`| Update one shadow layer                        |
//! | `preset <name>`                | Apply a timing, shadow or radius preset        |
//! | `cell <row> <col> <name>`      | Name a grid template cell (1-based)            |
//! | `grow cols\|rows`              | Add a grid column or row                       |
//! | `shrink cols\|rows`            | Drop the last grid column or row               |
//! | `generate`                     | Regenerate the color scheme from its primary   |
//! | `contrast`                     | Report the scheme's text contrast              |
//! | `reset [kind]`                 | Restore defaults                               |
//! | `copy`                         | Copy the active CSS to the clipboard           |
//! | `tailwind`                     | Print the shade ramp as Tailwind colors        |
//! | `list`                         | List generators                                |
//! | `help`                         | Show this table                                |
//! | `quit`                         | Leave                                          |
//!
//! `add`, `remove` and `preset` act on the active generator; the other list
//! and grid commands name their target and work from any generator.
//!
//! # Errors
//!
//! Every failure is a [`CommandError`] and leaves the store untouched: all
//! values of a command are validated before the first setter runs.

use std::fmt::Write as _;

use crate::animation::{AnimationTimingPatch, TimingPreset};
use crate::error::CommandError;
use crate::fields::{self, Assign};
use crate::flexbox::FlexboxPatch;
use crate::glass::GlassmorphismPatch;
use crate::gradient::{ColorStopPatch, GradientPatch};
use crate::grid::{self, CssGridPatch};
use crate::palette::{self, ColorSchemePatch, ColorShadePatch};
use crate::presets::{RadiusPreset, ShadowPreset};
use crate::radius::BorderRadiusPatch;
use crate::shadow::ShadowLayerPatch;
use crate::store::{GeneratorKind, Store};
use crate::transform::TransformPatch;

const USAGE_COMMAND: &str = "<command> [arguments...] (try `help`)";
const USAGE_USE: &str = "use <kind>";
const USAGE_SET: &str = "set <field>=<value>...";
const USAGE_REMOVE: &str = "remove <id>";
const USAGE_STOP: &str = "stop <id> <field>=<value>...";
const USAGE_LAYER: &str = "layer <id> <field>=<value>...";
const USAGE_PRESET: &str = "preset <name>";
const USAGE_CELL: &str = "cell <row> <col> <name>";
const USAGE_GROW: &str = "grow cols|rows";
const USAGE_SHRINK: &str = "shrink cols|rows";

const HELP: &str = "\
use <kind>                      switch the active generator
set <field>=<value>...          patch the active generator
show [kind]                     print CSS
json [kind]                     print the configuration as JSON
add | remove <id>               add or remove a gradient stop / shadow layer
stop <id> <field>=<value>...    update a gradient stop
layer <id> <field>=<value>...   update a shadow layer
preset <name>                   apply a timing, shadow or radius preset
cell <row> <col> <name>         name a grid cell (1-based)
grow cols|rows                  add a grid column or row
shrink cols|rows                drop the last grid column or row
generate                        regenerate the color scheme
contrast                        report text contrast of the scheme
reset [kind]                    restore defaults
copy                            copy the active CSS
tailwind                        print shades as Tailwind colors
list                            list generators
quit                            leave";

// ---------------------------------------------------------------------------
// Command
// ---------------------------------------------------------------------------

/// Which grid track list `grow`/`shrink` resizes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    Columns,
    Rows,
}

/// A parsed command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Use(GeneratorKind),

    /// `field=value` pairs in input order.
    Set(Vec<(String, String)>),

    Show(Option<GeneratorKind>),
    Json(Option<GeneratorKind>),
    Add,
    Remove(String),

    Stop {
        id: String,
        assignments: Vec<(String, String)>,
    },

    Layer {
        id: String,
        assignments: Vec<(String, String)>,
    },

    /// Resolved against the active generator when executed.
    Preset(String),

    /// 0-based cell coordinates.
    Cell {
        row: usize,
        column: usize,
        name: String,
    },

    Grow(Axis),
    Shrink(Axis),
    Generate,
    Contrast,
    Reset(Option<GeneratorKind>),
    Copy,
    Tailwind,
    List,
    Help,
    Quit,
}

/// What the caller should do after a command ran.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Nothing to show.
    Silent,

    /// Text for the user.
    Print(String),

    /// Text for the clipboard.
    Copy(String),

    Quit,
}

// ---------------------------------------------------------------------------
// Parsing
// ---------------------------------------------------------------------------

/// Split `line` into words, honouring single and double quotes.
fn tokenize(line: &str) -> Result<Vec<String>, CommandError> {
    let mut words = Vec::new();
    let mut current = String::new();
    let mut in_word = false;
    let mut quote = None;

    for ch in line.chars() {
        match quote {
            Some(open) if ch == open => quote = None,
            Some(_) => current.push(ch),
            None if ch == '"' || ch == '\'' => {
                quote = Some(ch);
                in_word = true;
            }
            None if ch.is_whitespace() => {
                if in_word {
                    words.push(std::mem::take(&mut current));
                    in_word = false;
                }
            }
            None => {
                current.push(ch);
                in_word = true;
            }
        }
    }

    if quote.is_some() {
        return Err(CommandError::UnterminatedQuote);
    }
    if in_word {
        words.push(current);
    }
    Ok(words)
}

/// Parse `field=value` words. At least one is required.
fn parse_assignments(words: &[String], usage: &'static str) -> Result<Vec<(String, String)>, CommandError> {
    if words.is_empty() {
        return Err(CommandError::Usage(usage));
    }
    words
        .iter()
        .map(|word| {
            let (field, value) = word.split_once('=').ok_or(CommandError::Usage(usage))?;
            let field = field.trim().to_ascii_lowercase();
            if field.is_empty() {
                return Err(CommandError::Usage(usage));
            }
            Ok((field, value.to_string()))
        })
        .collect()
}

fn parse_kind(word: Option<&String>) -> Result<Option<GeneratorKind>, CommandError> {
    word.map(|w| w.parse::<GeneratorKind>()).transpose().map_err(CommandError::from)
}

fn parse_axis(word: Option<&String>, usage: &'static str) -> Result<Axis, CommandError> {
    match word.map(|w| w.to_ascii_lowercase()).as_deref() {
        Some("cols" | "col" | "columns" | "column") => Ok(Axis::Columns),
        Some("rows" | "row") => Ok(Axis::Rows),
        _ => Err(CommandError::Usage(usage)),
    }
}

/// A 1-based index as typed by the user, converted to 0-based.
fn parse_index(field: &str, word: &str) -> Result<usize, CommandError> {
    fields::count(field, word)?
        .checked_sub(1)
        .ok_or_else(|| CommandError::invalid(field, word, "counting starts at 1"))
}

/// Parse one command line.
///
/// # Errors
///
/// Returns a [`CommandError`] for an unknown command, a malformed argument
/// list or an unknown generator name.
pub fn parse_command(line: &str) -> Result<Command, CommandError> {
    let line = line.trim();
    let line = line.strip_prefix(':').unwrap_or(line);
    let words = tokenize(line)?;
    let Some((name, args)) = words.split_first() else {
        return Err(CommandError::Usage(USAGE_COMMAND));
    };

    let command = match name.to_ascii_lowercase().as_str() {
        "use" => match args {
            [kind] => Command::Use(kind.parse()?),
            _ => return Err(CommandError::Usage(USAGE_USE)),
        },
        "set" => Command::Set(parse_assignments(args, USAGE_SET)?),
        "show" | "css" => Command::Show(parse_kind(args.first())?),
        "json" => Command::Json(parse_kind(args.first())?),
        "add" => Command::Add,
        "remove" | "rm" => match args {
            [id] => Command::Remove(id.clone()),
            _ => return Err(CommandError::Usage(USAGE_REMOVE)),
        },
        "stop" => match args {
            [id, rest @ ..] => Command::Stop {
                id: id.clone(),
                assignments: parse_assignments(rest, USAGE_STOP)?,
            },
            [] => return Err(CommandError::Usage(USAGE_STOP)),
        },
        "layer" => match args {
            [id, rest @ ..] => Command::Layer {
                id: id.clone(),
                assignments: parse_assignments(rest, USAGE_LAYER)?,
            },
            [] => return Err(CommandError::Usage(USAGE_LAYER)),
        },
        "preset" => match args {
            [preset] => Command::Preset(preset.clone()),
            _ => return Err(CommandError::Usage(USAGE_PRESET)),
        },
        "cell" => match args {
            [row, column, name] => Command::Cell {
                row: parse_index("row", row)?,
                column: parse_index("column", column)?,
                name: name.clone(),
            },
            _ => return Err(CommandError::Usage(USAGE_CELL)),
        },
        "grow" => Command::Grow(parse_axis(args.first(), USAGE_GROW)?),
        "shrink" => Command::Shrink(parse_axis(args.first(), USAGE_SHRINK)?),
        "generate" | "gen" => Command::Generate,
        "contrast" => Command::Contrast,
        "reset" => Command::Reset(parse_kind(args.first())?),
        "copy" => Command::Copy,
        "tailwind" => Command::Tailwind,
        "list" | "ls" => Command::List,
        "help" | "h" | "?" => Command::Help,
        "quit" | "q" | "exit" => Command::Quit,
        _ => return Err(CommandError::UnknownCommand(name.clone())),
    };
    Ok(command)
}

// ---------------------------------------------------------------------------
// Execution
// ---------------------------------------------------------------------------

/// Run `command` against `store`.
///
/// # Errors
///
/// Returns a [`CommandError`] when a value does not validate, an id does
/// not exist, or the command does not apply to the active generator. The
/// store is unchanged in every error case.
pub fn execute(store: &mut Store, command: Command) -> Result<Outcome, CommandError> {
    match command {
        Command::Use(kind) => store.set_active(kind),
        Command::Set(assignments) => set(store, &assignments)?,
        Command::Show(kind) => {
            let kind = kind.unwrap_or_else(|| store.active());
            return Ok(Outcome::Print(store.render(kind).to_string()));
        }
        Command::Json(kind) => {
            let kind = kind.unwrap_or_else(|| store.active());
            let json = serde_json::to_string_pretty(&store.config_json(kind)?)?;
            return Ok(Outcome::Print(json));
        }
        Command::Add => return add(store),
        Command::Remove(id) => remove(store, &id)?,
        Command::Stop { id, assignments } => {
            let patch = ColorStopPatch::from_assignments(&assignments)?;
            if !store.update_stop(&id, patch) {
                return Err(CommandError::UnknownId { list: "gradient stop", id });
            }
        }
        Command::Layer { id, assignments } => {
            let patch = ShadowLayerPatch::from_assignments(&assignments)?;
            if !store.update_shadow(&id, patch) {
                return Err(CommandError::UnknownId { list: "shadow layer", id });
            }
        }
        Command::Preset(name) => preset(store, &name)?,
        Command::Cell { row, column, name } => cell(store, row, column, &name)?,
        // At the track limits these are no-ops, not errors.
        Command::Grow(Axis::Columns) => {
            store.add_column();
        }
        Command::Grow(Axis::Rows) => {
            store.add_row();
        }
        Command::Shrink(Axis::Columns) => {
            store.remove_column();
        }
        Command::Shrink(Axis::Rows) => {
            store.remove_row();
        }
        Command::Generate => store.regenerate_scheme(),
        Command::Contrast => return Ok(Outcome::Print(contrast_report(store))),
        Command::Reset(kind) => {
            let kind = kind.unwrap_or_else(|| store.active());
            store.reset(kind);
        }
        Command::Copy => return Ok(Outcome::Copy(store.render_active().to_string())),
        Command::Tailwind => return Ok(Outcome::Print(palette::tailwind_colors(store.color_shade()))),
        Command::List => return Ok(Outcome::Print(list(store))),
        Command::Help => return Ok(Outcome::Print(HELP.to_string())),
        Command::Quit => return Ok(Outcome::Quit),
    }
    Ok(Outcome::Silent)
}

fn set(store: &mut Store, assignments: &[(String, String)]) -> Result<(), CommandError> {
    match store.active() {
        GeneratorKind::Glassmorphism => store.set_glassmorphism(GlassmorphismPatch::from_assignments(assignments)?),
        GeneratorKind::Gradient => store.set_gradient(GradientPatch::from_assignments(assignments)?),
        GeneratorKind::ColorScheme => store.set_color_scheme(ColorSchemePatch::from_assignments(assignments)?),
        GeneratorKind::CssGrid => store.set_css_grid(CssGridPatch::from_assignments(assignments)?),
        GeneratorKind::Flexbox => store.set_flexbox(FlexboxPatch::from_assignments(assignments)?),
        GeneratorKind::ColorShade => store.set_color_shade(ColorShadePatch::from_assignments(assignments)?),
        GeneratorKind::AnimationTiming => set_animation(store, assignments)?,
        GeneratorKind::BoxShadow => {
            return Err(CommandError::WrongGenerator {
                command: "set",
                active: GeneratorKind::BoxShadow,
            });
        }
        GeneratorKind::Transform => store.set_transform(TransformPatch::from_assignments(assignments)?),
        GeneratorKind::BorderRadius => store.set_border_radius(BorderRadiusPatch::from_assignments(assignments)?),
    }
    Ok(())
}

/// Preset and duration go through the patch; control points are applied
/// after it, each switching the curve to custom.
fn set_animation(store: &mut Store, assignments: &[(String, String)]) -> Result<(), CommandError> {
    let mut points = Vec::new();
    let mut rest = Vec::new();
    for (field, value) in assignments {
        match fields::bezier_index(field) {
            Some(index) => points.push((index, fields::number(field, value)?)),
            None => rest.push((field.clone(), value.clone())),
        }
    }
    let patch = AnimationTimingPatch::from_assignments(&rest)?;

    store.set_animation_timing(patch);
    for (index, value) in points {
        store.set_bezier_point(index, value);
    }
    Ok(())
}

fn add(store: &mut Store) -> Result<Outcome, CommandError> {
    let id = match store.active() {
        GeneratorKind::Gradient => store.add_stop(),
        GeneratorKind::BoxShadow => store.add_shadow(),
        active => return Err(CommandError::WrongGenerator { command: "add", active }),
    };
    Ok(Outcome::Print(format!("added {id}")))
}

fn remove(store: &mut Store, id: &str) -> Result<(), CommandError> {
    match store.active() {
        GeneratorKind::Gradient => {
            if store.gradient().stop(id).is_none() {
                return Err(CommandError::UnknownId { list: "gradient stop", id: id.to_string() });
            }
            // Refused below two stops; the store logs it.
            store.remove_stop(id);
        }
        GeneratorKind::BoxShadow => {
            if store.box_shadow().layer(id).is_none() {
                return Err(CommandError::UnknownId { list: "shadow layer", id: id.to_string() });
            }
            store.remove_shadow(id);
        }
        active => return Err(CommandError::WrongGenerator { command: "remove", active }),
    }
    Ok(())
}

fn preset(store: &mut Store, name: &str) -> Result<(), CommandError> {
    match store.active() {
        GeneratorKind::AnimationTiming => store.select_preset(name.parse::<TimingPreset>()?),
        GeneratorKind::BoxShadow => store.apply_shadow_preset(name.parse::<ShadowPreset>()?),
        GeneratorKind::BorderRadius => store.apply_radius_preset(name.parse::<RadiusPreset>()?),
        active => return Err(CommandError::WrongGenerator { command: "preset", active }),
    }
    Ok(())
}

fn cell(store: &mut Store, row: usize, column: usize, name: &str) -> Result<(), CommandError> {
    let grid = store.css_grid();
    if row >= grid.rows {
        return Err(CommandError::invalid("row", &(row + 1).to_string(), "outside the grid"));
    }
    if column >= grid.columns {
        return Err(CommandError::invalid("column", &(column + 1).to_string(), "outside the grid"));
    }
    if !grid::is_valid_area_name(name) {
        return Err(CommandError::invalid("name", name, "area names are single words"));
    }
    store.set_area(row, column, name);
    Ok(())
}

fn contrast_report(store: &Store) -> String {
    let report = store.scheme_accessibility();
    [("text", report.text), ("text-secondary", report.text_secondary)]
        .iter()
        .map(|(role, r)| {
            format!(
                "{role:<16}{:>6.2}:1  {}",
                r.contrast_ratio,
                r.classification.level.label()
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn list(store: &Store) -> String {
    let mut out = String::new();
    for &kind in GeneratorKind::ALL {
        let marker = if kind == store.active() { '*' } else { ' ' };
        let _ = writeln!(out, "{marker} {:<18}{}", kind.keyword(), kind.title());
    }
    out.truncate(out.trim_end().len());
    out
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn run(store: &mut Store, line: &str) -> Result<Outcome, CommandError> {
        execute(store, parse_command(line)?)
    }

    fn printed(store: &mut Store, line: &str) -> String {
        match run(store, line) {
            Ok(Outcome::Print(text)) => text,
            other => panic!("expected printed output from {line:?}, got {other:?}"),
        }
    }

    // ── tokenize ────────────────────────────────────────────────────

    #[test]
    fn tokenize_quotes() {
        assert_eq!(
            tokenize(r#"set origin="top right" rotate=45"#).unwrap(),
            vec!["set", "origin=top right", "rotate=45"]
        );
        assert_eq!(tokenize("  a   'b c'  ").unwrap(), vec!["a", "b c"]);
        assert_eq!(tokenize("x ''").unwrap(), vec!["x", ""]);
        assert_eq!(tokenize("set a=\"b"), Err(CommandError::UnterminatedQuote));
    }

    // ── parse ───────────────────────────────────────────────────────

    #[test]
    fn parse_basic_commands() {
        assert_eq!(parse_command(":use gradient"), Ok(Command::Use(GeneratorKind::Gradient)));
        assert_eq!(parse_command("show"), Ok(Command::Show(None)));
        assert_eq!(
            parse_command("json box-shadow"),
            Ok(Command::Json(Some(GeneratorKind::BoxShadow)))
        );
        assert_eq!(parse_command("  q  "), Ok(Command::Quit));
        assert_eq!(parse_command("grow cols"), Ok(Command::Grow(Axis::Columns)));
        assert_eq!(parse_command("shrink Rows"), Ok(Command::Shrink(Axis::Rows)));
    }

    #[test]
    fn parse_set_lowercases_fields() {
        assert_eq!(
            parse_command("set Blur=20 background-color=#fff"),
            Ok(Command::Set(vec![
                ("blur".into(), "20".into()),
                ("background-color".into(), "#fff".into()),
            ]))
        );
    }

    #[test]
    fn parse_cell_is_one_based() {
        assert_eq!(
            parse_command("cell 1 3 aside"),
            Ok(Command::Cell { row: 0, column: 2, name: "aside".into() })
        );
        assert!(matches!(parse_command("cell 0 1 x"), Err(CommandError::InvalidValue { .. })));
    }

    #[test]
    fn parse_errors() {
        assert_eq!(parse_command(""), Err(CommandError::Usage(USAGE_COMMAND)));
        assert_eq!(parse_command("frobnicate"), Err(CommandError::UnknownCommand("frobnicate".into())));
        assert_eq!(parse_command("set blur"), Err(CommandError::Usage(USAGE_SET)));
        assert_eq!(parse_command("set"), Err(CommandError::Usage(USAGE_SET)));
        assert_eq!(parse_command("stop"), Err(CommandError::Usage(USAGE_STOP)));
        assert_eq!(parse_command("grow diagonally"), Err(CommandError::Usage(USAGE_GROW)));
        assert!(matches!(parse_command("use sparkles"), Err(CommandError::Keyword(_))));
    }

    // ── execute ─────────────────────────────────────────────────────

    #[test]
    fn gradient_example() {
        let mut store = Store::new();
        run(&mut store, "use gradient").unwrap();
        assert_eq!(
            printed(&mut store, "show"),
            ".gradient {\n  background: linear-gradient(45deg, #3B82F6 0%, #14B8A6 100%);\n}"
        );
    }

    #[test]
    fn set_patches_active_generator() {
        let mut store = Store::new();
        run(&mut store, "use transform").unwrap();
        run(&mut store, "set rotate=45deg origin='top left'").unwrap();
        assert_eq!(
            printed(&mut store, "show"),
            ".transform {\n  transform: rotate(45deg);\n  transform-origin: top left;\n}"
        );
    }

    #[test]
    fn failed_set_changes_nothing() {
        let mut store = Store::new();
        let err = run(&mut store, "set blur=4 border-color=#12").unwrap_err();
        assert_eq!(err, CommandError::invalid("border-color", "#12", "not a color"));
        assert_eq!(store.version(), 0);
    }

    #[test]
    fn stop_and_layer_updates() {
        let mut store = Store::new();
        run(&mut store, "stop 2 color=red pos=60").unwrap();
        assert_eq!(
            store.render(GeneratorKind::Gradient).value_of("background"),
            Some("linear-gradient(45deg, #3B82F6 0%, red 60%)")
        );
        run(&mut store, "layer 1 inset=yes").unwrap();
        assert!(store.box_shadow().shadows[0].inset);
        assert_eq!(
            run(&mut store, "stop 9 color=red"),
            Err(CommandError::UnknownId { list: "gradient stop", id: "9".into() })
        );
    }

    #[test]
    fn add_and_remove_follow_active() {
        let mut store = Store::new();
        assert_eq!(
            run(&mut store, "add"),
            Err(CommandError::WrongGenerator { command: "add", active: GeneratorKind::Glassmorphism })
        );
        run(&mut store, "use gradient").unwrap();
        assert_eq!(run(&mut store, "add"), Ok(Outcome::Print("added 3".into())));
        run(&mut store, "remove 1").unwrap();
        run(&mut store, "remove 2").unwrap();
        assert_eq!(store.gradient().stops.len(), 2);
        assert!(matches!(run(&mut store, "remove 1"), Err(CommandError::UnknownId { .. })));
    }

    #[test]
    fn presets_follow_active() {
        let mut store = Store::new();
        run(&mut store, "use border-radius").unwrap();
        run(&mut store, "preset pill").unwrap();
        assert_eq!(printed(&mut store, "show"), ".border-radius {\n  border-radius: 50% 50% 50% 50%;\n}");

        run(&mut store, "use animation-timing").unwrap();
        assert!(matches!(run(&mut store, "preset pill"), Err(CommandError::Keyword(_))));
        run(&mut store, "preset linear").unwrap();
        assert_eq!(store.animation_timing().preset, TimingPreset::Linear);

        run(&mut store, "use flexbox").unwrap();
        assert!(matches!(run(&mut store, "preset large"), Err(CommandError::WrongGenerator { .. })));
    }

    #[test]
    fn bezier_points_switch_to_custom() {
        let mut store = Store::new();
        run(&mut store, "use animation-timing").unwrap();
        run(&mut store, "set duration=300ms x1=0.1 y2=1.4").unwrap();
        let rule = store.render_active();
        assert_eq!(rule.value_of("animation-timing-function"), Some("cubic-bezier(0.1, 0.1, 0.25, 1.4)"));
        assert_eq!(rule.value_of("animation-duration"), Some("300ms"));
    }

    #[test]
    fn box_shadow_set_is_refused() {
        let mut store = Store::new();
        run(&mut store, "use box-shadow").unwrap();
        assert!(matches!(run(&mut store, "set blur=3"), Err(CommandError::WrongGenerator { .. })));
    }

    #[test]
    fn grid_commands() {
        let mut store = Store::new();
        run(&mut store, "grow cols").unwrap();
        run(&mut store, "cell 2 4 ads").unwrap();
        assert_eq!(store.css_grid().template_areas[1], vec!["sidebar", "main", "main", "ads"]);
        assert!(matches!(run(&mut store, "cell 4 1 x"), Err(CommandError::InvalidValue { .. })));
        assert!(matches!(run(&mut store, "cell 1 1 'two words'"), Err(CommandError::InvalidValue { .. })));
        for _ in 0..5 {
            run(&mut store, "shrink rows").unwrap();
        }
        assert_eq!(store.css_grid().rows, 1);
    }

    #[test]
    fn scheme_commands() {
        let mut store = Store::new();
        run(&mut store, "use color-scheme").unwrap();
        run(&mut store, "set primary=#ff0000").unwrap();
        run(&mut store, "generate").unwrap();
        assert_eq!(store.color_scheme().secondary, "#ffff00");

        run(&mut store, "reset").unwrap();
        let report = printed(&mut store, "contrast");
        let lines: Vec<&str> = report.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with("text "), "{report}");
        assert!(lines[0].ends_with("AAA"), "{report}");
    }

    #[test]
    fn copy_returns_active_css() {
        let mut store = Store::new();
        run(&mut store, "use border-radius").unwrap();
        run(&mut store, "set all=8").unwrap();
        assert_eq!(
            run(&mut store, "copy"),
            Ok(Outcome::Copy(".border-radius {\n  border-radius: 8px 8px 8px 8px;\n}".into()))
        );
    }

    #[test]
    fn json_is_pretty() {
        let mut store = Store::new();
        let json = printed(&mut store, "json flexbox");
        assert!(json.contains("\"flexDirection\": \"row\""), "{json}");
    }

    #[test]
    fn list_marks_active() {
        let mut store = Store::new();
        run(&mut store, "use css-grid").unwrap();
        let listing = printed(&mut store, "list");
        assert_eq!(listing.lines().count(), 10);
        assert!(listing.lines().any(|l| l.starts_with("* css-grid")), "{listing}");
        assert!(listing.lines().any(|l| l.starts_with("  gradient")), "{listing}");
    }

    #[test]
    fn tailwind_and_help() {
        let mut store = Store::new();
        assert!(printed(&mut store, "tailwind").starts_with("colors: {\n  primary: {\n    100: '#"));
        assert!(printed(&mut store, "help").contains("cell <row> <col> <name>"));
        assert_eq!(run(&mut store, "quit"), Ok(Outcome::Quit));
    }
}
