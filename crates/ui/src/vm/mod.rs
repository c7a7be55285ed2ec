mod lab_vm;
mod shell_vm;

pub use lab_vm::{CameraTabVm, LabVm, PinholeVm, SlrVm, ViewCameraVm, map_lab, shutter_label};
pub use shell_vm::{DotState, SlideDotVm, SlideShellVm, map_slide_shell};
