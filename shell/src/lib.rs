// Copyright 2023 System76 <info@system76.com>
// SPDX-License-Identifier: MPL-2.0

use slotmap::SlotMap;

slotmap::new_key_type! {
    /// A unique slotmap key to a display.
    pub struct DisplayKey;
}

#[derive(Clone, Debug, Default)]
pub struct List {
    pub displays: SlotMap<DisplayKey, Display>,
}

/// One physical display as reported by `displayplacer list`.
#[derive(Clone, Debug)]
pub struct Display {
    pub persistent_id: String,
    pub contextual_id: String,
    pub serial_id: String,
    pub kind: String,
    pub resolution: (u32, u32),
    pub hertz: Option<u32>,
    pub color_depth: Option<u32>,
    pub scaling: bool,
    pub origin: (i32, i32),
    pub rotation: f32,
    pub enabled: bool,
    pub main: bool,
}

impl Display {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            persistent_id: String::new(),
            contextual_id: String::new(),
            serial_id: String::new(),
            kind: String::new(),
            resolution: (0, 0),
            hertz: None,
            color_depth: None,
            scaling: false,
            origin: (0, 0),
            rotation: 0.0,
            enabled: true,
            main: false,
        }
    }
}

impl Default for Display {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("could not exec `displayplacer`")]
    Spawn(#[source] std::io::Error),
    #[error("`displayplacer` output not UTF-8")]
    Utf(#[from] std::str::Utf8Error),
}

/// Fetches the current display layout from `displayplacer list`.
///
/// # Errors
///
/// Returns error if `displayplacer` could not be spawned, or if its report
/// is not UTF-8.
pub async fn list() -> Result<List, Error> {
    let stdout = tokio::process::Command::new("displayplacer")
        .arg("list")
        .stdin(std::process::Stdio::null())
        .stdout(std::process::Stdio::piped())
        .stderr(std::process::Stdio::null())
        .output()
        .await
        .map_err(Error::Spawn)?
        .stdout;

    Ok(parse_list(std::str::from_utf8(&stdout)?))
}

/// Parses the line-oriented report emitted by `displayplacer list`.
///
/// A display record opens at a `Persistent screen id:` line and closes at a
/// blank line or at the start of a `Resolutions for ...` mode table.
/// Parsing stops at the suggested-command trailer. Values that fail to
/// parse are skipped and leave their field at the default.
#[must_use]
pub fn parse_list(report: &str) -> List {
    let mut list = List {
        displays: SlotMap::with_key(),
    };

    let mut current: Option<Display> = None;

    for line in report.lines() {
        if line.starts_with("Persistent screen id:") {
            if let Some(display) = current.take() {
                list.displays.insert(display);
            }

            current = Some(Display::new());
        }

        if line.trim().is_empty() || line.starts_with("Resolutions for") {
            if let Some(display) = current.take() {
                list.displays.insert(display);
            }

            continue;
        }

        if line.starts_with("Execute the command below") {
            break;
        }

        let Some((key, value)) = line.split_once(':') else {
            if let Some(display) = current.take() {
                list.displays.insert(display);
            }

            continue;
        };

        let Some(display) = current.as_mut() else {
            continue;
        };

        let value = value.trim();

        match key.trim() {
            "Persistent screen id" => display.persistent_id = value.to_owned(),
            "Contextual screen id" => display.contextual_id = value.to_owned(),
            "Serial screen id" => display.serial_id = value.to_owned(),
            "Type" => display.kind = value.to_owned(),

            "Resolution" => {
                if let Some((width, height)) = value.split_once('x') {
                    display.resolution = (
                        width.trim().parse().unwrap_or_default(),
                        height.trim().parse().unwrap_or_default(),
                    );
                }
            }

            "Hertz" => display.hertz = value.parse().ok(),

            "Color Depth" => display.color_depth = value.parse().ok(),

            "Scaling" => display.scaling = value == "on",

            // The value reads `(x,y)`, optionally trailed by a note such
            // as `- main display`.
            "Origin" => {
                if let Some(origin) = parse_origin(value) {
                    display.origin = origin;
                }

                display.main = value.contains("main display");
            }

            "Rotation" => {
                if let Some(degrees) = value.split_whitespace().next() {
                    display.rotation = degrees.parse().unwrap_or_default();
                }
            }

            "Enabled" => display.enabled = value == "true",

            _ => (),
        }
    }

    if let Some(display) = current.take() {
        list.displays.insert(display);
    }

    list
}

fn parse_origin(value: &str) -> Option<(i32, i32)> {
    let inner = value.strip_prefix('(')?;
    let (inner, _) = inner.split_once(')')?;
    let (x, y) = inner.split_once(',')?;

    Some((x.trim().parse().ok()?, y.trim().parse().ok()?))
}

/// Formats the per-screen argument `displayplacer` expects when applying a
/// new origin to a display.
#[must_use]
pub fn position_args(display: &Display, origin: (i32, i32)) -> String {
    format!(
        "id:{} res:{}x{} origin:({},{})",
        display.persistent_id, display.resolution.0, display.resolution.1, origin.0, origin.1
    )
}

/// Applies a new origin to a display by invoking `displayplacer`.
///
/// # Errors
///
/// Returns error if `displayplacer` could not be spawned.
pub async fn set_position(display: &Display, origin: (i32, i32)) -> Result<(), Error> {
    tokio::process::Command::new("displayplacer")
        .arg(position_args(display, origin))
        .status()
        .await
        .map_err(Error::Spawn)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::{parse_list, parse_origin, position_args};

    const REPORT: &str = "\
Persistent screen id: 37D8832A-2D66-02CA-B9F7-8F30A301B230
Contextual screen id: 69733382
Serial screen id: s4251086178
Type: 27 inch external screen
Resolution: 2560x1440
Hertz: 59
Color Depth: 8
Scaling: off
Origin: (0,0) - main display
Rotation: 0 - rotate internal screen example (may distort image): displayplacer \"id:69733382 degree:90\"
Enabled: true

Persistent screen id: C5FF8F5A-9AFA-4B05-A6B5-A6BB384FD636
Contextual screen id: 70244602
Serial screen id: s16843009
Type: 24 inch external screen
Resolution: 1920x1200
Hertz: 60
Color Depth: 8
Scaling: off
Origin: (2560,240)
Rotation: 0
Enabled: true

Resolutions for rotation 0:
  mode 0: res:2560x1440 hz:59 color_depth:8 <current>
  mode 1: res:1280x720 hz:59 color_depth:8

Execute the command below to set your screens to the current arrangement:
displayplacer \"id:37D8832A res:2560x1440 origin:(0,0) degree:0\"
";

    #[test]
    fn parses_two_displays() {
        let list = parse_list(REPORT);
        assert_eq!(list.displays.len(), 2);

        let mut displays = list.displays.values();
        let first = displays.next().unwrap();
        let second = displays.next().unwrap();

        assert_eq!(first.persistent_id, "37D8832A-2D66-02CA-B9F7-8F30A301B230");
        assert_eq!(first.contextual_id, "69733382");
        assert_eq!(first.serial_id, "s4251086178");
        assert_eq!(first.kind, "27 inch external screen");
        assert_eq!(first.resolution, (2560, 1440));
        assert_eq!(first.hertz, Some(59));
        assert_eq!(first.color_depth, Some(8));
        assert!(!first.scaling);
        assert_eq!(first.origin, (0, 0));
        assert!(first.main);
        assert!(first.enabled);

        assert_eq!(second.resolution, (1920, 1200));
        assert_eq!(second.origin, (2560, 240));
        assert!(!second.main);
    }

    #[test]
    fn mode_table_and_trailer_are_ignored() {
        let list = parse_list(REPORT);

        for display in list.displays.values() {
            assert!(!display.persistent_id.is_empty());
        }
    }

    #[test]
    fn origin_accepts_negative_coordinates() {
        assert_eq!(parse_origin("(-1920,-240)"), Some((-1920, -240)));
        assert_eq!(parse_origin("not an origin"), None);
    }

    #[test]
    fn position_args_format() {
        let list = parse_list(REPORT);
        let display = list.displays.values().nth(1).unwrap();

        assert_eq!(
            position_args(display, (2560, -120)),
            "id:C5FF8F5A-9AFA-4B05-A6B5-A6BB384FD636 res:1920x1200 origin:(2560,-120)"
        );
    }
}
