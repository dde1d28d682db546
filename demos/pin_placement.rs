use atlas_quiz::{
    Catalog, GeoPoint, GeographyKind, GeographyTarget, ImageSize, PixelPoint, RobinsonProjector,
    SCHOOL_ATLAS_ASPECT_RATIO, SchoolLevel, evaluate,
};
use std::env;

fn sample_targets() -> Result<Vec<GeographyTarget>, atlas_quiz::Error> {
    let records = [
        ("Mont Blanc", GeographyKind::Mountain, 45.8326, 6.8652, 50.0),
        ("Bodensee", GeographyKind::Lake, 47.63, 9.375, 30.0),
        ("Rhein", GeographyKind::River, 50.3569, 7.589, 80.0),
        ("Nordsee", GeographyKind::Sea, 56.0, 3.0, 200.0),
        ("Sizilien", GeographyKind::Island, 37.5999, 14.0154, 80.0),
    ];

    records
        .into_iter()
        .map(|(name, kind, lat, lon, tolerance_km)| {
            GeographyTarget::new(name, kind, GeoPoint::new(lat, lon), tolerance_km)
        })
        .collect()
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args: Vec<String> = env::args().collect();
    if args.len() != 4 {
        eprintln!("Usage: {} <map-height-px> <tap-x> <tap-y>", args[0]);
        std::process::exit(1);
    }

    let height: f64 = args[1].parse()?;
    let tap = PixelPoint::new(args[2].parse()?, args[3].parse()?);

    let size = ImageSize::from_height(height, SCHOOL_ATLAS_ASPECT_RATIO);
    let projector = RobinsonProjector::default();
    let guess = projector.unproject(tap, size);

    println!("=== Tap ===");
    println!("Image: {:.0} x {:.0} px", size.width, size.height);
    println!("Pixel: ({:.1}, {:.1}) -> {}", tap.x, tap.y, guess);

    let mut warnings = Vec::new();
    let catalog = Catalog::from_records(sample_targets()?, Vec::new(), &mut warnings);
    for warning in &warnings {
        eprintln!("warning: {warning:?}");
    }

    println!("\n=== Verdicts ===");
    for target in catalog.targets(SchoolLevel::Sek1) {
        let verdict = evaluate(target, guess);
        let radius = projector.pixel_radius(target.tolerance_km, target.point, size);
        println!(
            "{:<12} {:>7.1} km  {}  {} star(s)  (circle {:.1} px)",
            target.name,
            verdict.distance_km,
            if verdict.correct { "correct" } else { "wrong  " },
            verdict.stars,
            radius
        );
    }

    Ok(())
}
