use chrono::NaiveDate;
use swimtally::{IntensitySystem, ParseResultVerbose, PoolType, UnitKind, UnitSummary, WorkoutSummary};

/// Styles of the summary panel. Everything is plain text when colour is off.
mod style {
    const RESET: &str = "\x1b[0m";

    #[derive(Clone, Copy)]
    pub enum Role {
        /// Panel title.
        Title,
        /// `━━━ Section ━━━` separators and line ranges.
        Rule,
        /// Stroke and intensity names.
        Label,
        /// Distances.
        Distance,
        /// Diagnostics and repeat counts.
        Warn,
        /// Secondary text: set modifiers, cheat-sheet, empty states.
        Muted,
    }

    impl Role {
        fn code(self) -> &'static str {
            match self {
                Role::Title => "\x1b[1;36m",
                Role::Rule => "\x1b[90m",
                Role::Label => "\x1b[34m",
                Role::Distance => "\x1b[1;32m",
                Role::Warn => "\x1b[33m",
                Role::Muted => "\x1b[2m",
            }
        }
    }

    pub struct Palette {
        enabled: bool,
    }

    impl Palette {
        pub fn new(enabled: bool) -> Self {
            Self { enabled }
        }

        pub fn paint(&self, role: Role, s: impl AsRef<str>) -> String {
            if self.enabled { format!("{}{}{RESET}", role.code(), s.as_ref()) } else { s.as_ref().to_string() }
        }

        pub fn section(&self, name: &str) -> String {
            self.paint(Role::Rule, format!("━━━ {name} ━━━"))
        }
    }
}

use style::{Palette, Role};

/// What the report is printed for, besides the parse result itself.
pub struct Header {
    pub date: NaiveDate,
    pub pool: PoolType,
    pub system: IntensitySystem,
}

pub fn print_summary(header: &Header, res: &ParseResultVerbose, trace: bool, color: bool) {
    let palette = Palette::new(color);
    let unit = header.pool.unit_label();

    println!(
        "\n{}",
        palette.paint(Role::Title, format!("🏊 Workout Summary · {}", header.date.format("%B %-d, %Y")))
    );
    println!("{}", palette.paint(Role::Muted, format!("  {} · {} zones", header.pool.description(), header.system)));

    for diagnostic in &res.details.diagnostics {
        println!("  {}", palette.paint(Role::Warn, format!("⚠ {diagnostic}")));
    }

    println!("\n{}", palette.section("Total Distance"));
    println!("  {}", palette.paint(Role::Distance, format!("{} {unit}", res.summary.total_distance)));

    println!("\n{}", palette.section("Distance by Stroke"));
    print_strokes(&res.summary, unit, &palette);

    if !res.summary.intensity_distances.is_empty() {
        println!("\n{}", palette.section("Distance by Intensity"));
        for (label, distance) in res.summary.intensity_distances.iter() {
            println!("  {:<14} {distance} {unit}", palette.paint(Role::Label, label));
        }
    }

    if trace {
        println!("\n{}", palette.section("Sets"));
        print_units(&res.details.units, &palette);

        let metrics = &res.details.metrics;
        println!("\n{}", palette.section("Timing"));
        println!(
            "  Total: {}  │  Scan: {}  │  Lines: {} ({} blank)  │  Units: {} ({} groups)",
            palette.paint(Role::Distance, format!("{:?}", metrics.total)),
            palette.paint(Role::Label, format!("{:?}", metrics.scan)),
            metrics.lines,
            metrics.blank_lines,
            metrics.units,
            metrics.groups,
        );
    }

    println!("\n{}", palette.section("Format Examples"));
    print_cheatsheet(header.system, &palette);
    println!();
}

fn print_strokes(summary: &WorkoutSummary, unit: &str, palette: &Palette) {
    let mut any = false;
    for (stroke, distance) in summary.stroke_distances.iter().filter(|(_, distance)| *distance > 0) {
        any = true;
        println!("  {:<14} {distance} {unit}", palette.paint(Role::Label, stroke.name()));
    }
    if !any {
        println!("{}", palette.paint(Role::Muted, "  No distance yet"));
    }
}

fn print_units(units: &[UnitSummary], palette: &Palette) {
    if units.is_empty() {
        println!("{}", palette.paint(Role::Muted, "  No sets"));
        return;
    }

    for unit in units {
        let lines = if unit.start_line == unit.end_line {
            format!("L{}", unit.start_line)
        } else {
            format!("L{}-{}", unit.start_line, unit.end_line)
        };
        let kind = match unit.kind {
            UnitKind::Line => "line",
            UnitKind::Group => "group",
        };
        println!(
            "  {} {} {} {}",
            palette.paint(Role::Rule, format!("[{lines}]")),
            palette.paint(Role::Label, kind),
            palette.paint(Role::Warn, format!("{}x", unit.multiplier)),
            palette.paint(Role::Muted, unit.text.replace('\n', " ⏎ ")),
        );
        for set in &unit.sets {
            let intensity = set.intensity.map(|i| i.to_string()).unwrap_or_else(|| "-".to_string());
            println!(
                "      {} {} {} {}",
                palette.paint(Role::Distance, set.distance.to_string()),
                palette.paint(Role::Label, set.stroke.name()),
                palette.paint(Role::Muted, set.stroke_type.name()),
                palette.paint(Role::Muted, intensity),
            );
        }
    }
}

fn print_cheatsheet(system: IntensitySystem, palette: &Palette) {
    let zones = match system {
        IntensitySystem::Polar => "Polar Zones: Grey, Blue, Green, Orange, Red",
        IntensitySystem::International => "International: Yellow, White, Pink, Red, Blue, Brown, Purple",
    };
    for line in [
        "Stroke Types: drill/dr, kick/k, scull",
        "Heart Rate: hr150-hr190 (by 5)",
        "Heart Rate by 10: hr24-hr30",
        "Standard: Easy, Moderate, Strong, Fast",
        zones,
    ] {
        println!("  {}", palette.paint(Role::Muted, line));
    }
}
