//! Rotation Walkthrough Example
//!
//! Demonstrates building rotations, composing them, interpolating between
//! poses, and applying a rigid transform to a point.
//!
//! ```bash
//! cargo run --example rotation
//! ```

use core::f32::consts::FRAC_PI_2;

use vmath::{Quaternion, Transform, Vector};

fn main() {
    println!("vmath Rotation Example");
    println!("======================");

    // A 90° turn about the Z axis sends +X to +Y.
    let yaw = Quaternion::from_axis_angle(Vector::UNIT_Z, FRAC_PI_2);
    let spun = yaw.rotate(Vector::UNIT_X);
    println!("yaw(+X)        = ({:+.3}, {:+.3}, {:+.3})", spun.x, spun.y, spun.z);

    // Composition: the right-hand factor applies first.
    let pitch = Quaternion::from_axis_angle(Vector::UNIT_X, FRAC_PI_2);
    let pose = yaw * pitch;
    let v = pose.rotate(Vector::UNIT_Y);
    println!("yaw∘pitch(+Y)  = ({:+.3}, {:+.3}, {:+.3})", v.x, v.y, v.z);

    // Slerp from rest to the composed pose.
    println!();
    println!("slerp(identity -> pose):");
    for i in 0..=4 {
        let t = i as f32 / 4.0;
        let q = Quaternion::IDENTITY.slerp(pose, t);
        let p = q.rotate(Vector::UNIT_X);
        println!("  t={:.2}  +X -> ({:+.3}, {:+.3}, {:+.3})", t, p.x, p.y, p.z);
    }

    // A rigid transform: scale by 2, yaw 90°, then move up 5 units.
    let transform = Transform::new(yaw, Vector::new(0.0, 0.0, 5.0, 0.0), 2.0);
    let placed = transform.apply(Vector::UNIT_X);
    println!();
    println!(
        "transform(+X)  = ({:+.3}, {:+.3}, {:+.3})",
        placed.x, placed.y, placed.z
    );
}
