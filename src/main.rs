//! Demonstration of the compass core driven by simulated sensor events

use compass_core::{Compass, PositionSample, Target};

fn print_view(compass: &Compass, step: &str) {
    let vm = compass.view_model();
    println!("--- {} ---", step);
    println!(
        "  heading: {} ({})",
        vm.heading_display, vm.heading_source_label
    );
    println!(
        "  position: {}, {} (±{} m, {} m/s)",
        vm.position.latitude, vm.position.longitude, vm.position.accuracy, vm.position.speed
    );
    println!(
        "  target: {}  bearing: {}°  distance: {} km",
        vm.target_label, vm.bearing_display, vm.distance_display
    );
    println!(
        "  needles: north {:.1}°, target {:.1}°",
        vm.north_needle_deg, vm.target_needle_deg
    );
}

fn main() {
    println!("Compass Core Demonstration");
    println!("==========================");

    let mut compass = Compass::new();
    print_view(&compass, "startup, no sensors yet");

    // Orientation events as the browser bridge would deliver them
    compass
        .on_orientation_json(r#"{"alpha": 275.0, "beta": 3.2, "gamma": -1.0, "absolute": true}"#)
        .expect("valid orientation payload");
    print_view(&compass, "first orientation event (absolute alpha)");

    // A platform compass field takes priority over alpha
    compass
        .on_orientation_json(r#"{"webkitCompassHeading": 84.0, "alpha": 200.0}"#)
        .expect("valid orientation payload");
    print_view(&compass, "platform compass field arrives");

    // Geolocation fix: Istanbul
    compass.on_position_update(PositionSample {
        latitude: 41.0082,
        longitude: 28.9784,
        accuracy: Some(15.0),
        speed: Some(f64::NAN),
    });
    print_view(&compass, "first geolocation fix");

    // Switch to the built-in Qibla target
    compass.set_target(Target::qibla()).expect("built-in target");
    print_view(&compass, "Qibla target selected");

    // A user typo is rejected; the previous target stays selected
    match Target::custom(95.0, 10.0) {
        Ok(_) => unreachable!("latitude 95 must be rejected"),
        Err(err) => println!("\nrejected custom target: {}", err),
    }
    print_view(&compass, "after rejected custom entry");

    // A valid custom target
    let custom = Target::custom(51.477928, -0.001545).expect("valid coordinate");
    compass.set_target(custom).expect("validated target");
    print_view(&compass, "custom target (Greenwich)");

    // Label-only true-north preference
    compass.set_true_north_preference(true);
    print_view(&compass, "true-north label preference on");
}
