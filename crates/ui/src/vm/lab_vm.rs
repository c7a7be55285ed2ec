use blackbox_core::lab::ShotResult;
use blackbox_core::model::Challenge;
use services::PresentationSnapshot;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CameraTabVm {
    pub challenge: Challenge,
    pub label: &'static str,
    pub era: &'static str,
    pub selected: bool,
    pub mastered: bool,
}

#[derive(Clone, Debug, PartialEq)]
pub struct PinholeVm {
    pub aperture: f64,
    pub aperture_label: String,
    /// CSS filter applied to the preview image.
    pub preview_filter: String,
    pub optimal: bool,
    pub status: &'static str,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ViewCameraVm {
    pub tilt: bool,
    pub shift: bool,
    pub perspective_label: &'static str,
    pub focus_label: &'static str,
    pub corrected: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SlrVm {
    pub speed_index: usize,
    pub max_index: usize,
    pub speed_labels: Vec<String>,
    pub shooting: bool,
    pub shoot_label: &'static str,
    pub result_label: Option<&'static str>,
    pub result_hint: Option<&'static str>,
    pub subject_blurred: bool,
}

#[derive(Clone, Debug, PartialEq)]
pub struct LabVm {
    pub tabs: Vec<CameraTabVm>,
    pub selected: Challenge,
    pub pinhole: PinholeVm,
    pub view_camera: ViewCameraVm,
    pub slr: SlrVm,
    pub mastered_label: String,
    pub all_mastered: bool,
}

#[must_use]
pub fn shutter_label(speed: u32) -> String {
    format!("1/{speed}")
}

#[must_use]
pub fn map_lab(snapshot: &PresentationSnapshot) -> LabVm {
    let lab = &snapshot.lab;
    let tuning = lab.tuning();
    let mastery = snapshot.progress.camera_mastery();

    let tabs = Challenge::ALL
        .into_iter()
        .map(|challenge| CameraTabVm {
            challenge,
            label: challenge.label(),
            era: challenge.era(),
            selected: lab.selected() == challenge,
            mastered: mastery.get(challenge),
        })
        .collect();

    let pinhole_lab = lab.pinhole();
    let optimal = pinhole_lab.is_optimal(&tuning.pinhole);
    let status = if optimal {
        "Sharp image. Hold it there."
    } else if pinhole_lab.aperture() < tuning.pinhole.optimal_min {
        "Too small: diffraction blur"
    } else {
        "Too large: overlapping rays"
    };
    let pinhole = PinholeVm {
        aperture: pinhole_lab.aperture(),
        aperture_label: format!("{:.2}", pinhole_lab.aperture()),
        preview_filter: format!(
            "blur({:.1}px) brightness({:.2})",
            pinhole_lab.blur(&tuning.pinhole),
            pinhole_lab.brightness(&tuning.pinhole)
        ),
        optimal,
        status,
    };

    let view = lab.view_camera();
    let view_camera = ViewCameraVm {
        tilt: view.tilt(),
        shift: view.shift(),
        perspective_label: if view.shift() {
            "Corrected"
        } else {
            "Converging"
        },
        focus_label: if view.tilt() { "Scheimpflug" } else { "Standard" },
        corrected: view.is_corrected(),
    };

    let slr_lab = lab.slr();
    let result = slr_lab.result();
    let slr = SlrVm {
        speed_index: slr_lab.speed_index(),
        max_index: tuning.slr.shutter_speeds.len().saturating_sub(1),
        speed_labels: tuning
            .slr
            .shutter_speeds
            .iter()
            .map(|speed| shutter_label(*speed))
            .collect(),
        shooting: slr_lab.is_shooting(),
        shoot_label: if slr_lab.is_shooting() {
            "Processing..."
        } else {
            "SHOOT"
        },
        result_label: result.map(|result| match result {
            ShotResult::Success => "FROZEN! Perfect timing.",
            ShotResult::Blur => "MOTION BLUR",
        }),
        result_hint: match result {
            Some(ShotResult::Blur) => Some("Try faster shutter speed"),
            _ => None,
        },
        subject_blurred: result == Some(ShotResult::Blur),
    };

    LabVm {
        tabs,
        selected: lab.selected(),
        pinhole,
        view_camera,
        slr,
        mastered_label: format!(
            "{} / {} mastered",
            mastery.completed_count(),
            Challenge::ALL.len()
        ),
        all_mastered: mastery.all(),
    }
}
