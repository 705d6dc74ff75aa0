//! Facial landmark types.
//!
//! Detectors emit a whole face mesh per frame; the gaze pipeline only reads
//! a handful of points from it. Those points are named by [`LandmarkRole`]
//! and gathered into a fixed-size [`GazeLandmarks`] once per frame, so the
//! rest of the pipeline never indexes the raw mesh.

use std::ops::Index;

use gazeplot_common::error::{GazeplotError, GazeplotResult};
use serde::{Deserialize, Serialize};

/// Number of points in a face mesh with refined iris landmarks.
pub const REFINED_MESH_LEN: usize = 478;

/// A single detected keypoint, normalized to the frame.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Landmark {
    pub x: f64,
    pub y: f64,
    /// Relative depth. Absent in 2D detector output.
    #[serde(default)]
    pub z: f64,
}

impl Landmark {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y, z: 0.0 }
    }

    pub fn with_depth(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }
}

/// All landmarks of one detected face, in detector index order.
pub type FaceMesh = Vec<Landmark>;

/// Named landmark roles used by gaze extraction and the overlay.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LandmarkRole {
    LeftIrisCenter,
    RightIrisCenter,
    LeftEyeCorner,
    RightEyeCorner,
    /// Only drawn, never used in the gaze computation.
    NoseTip,
}

impl LandmarkRole {
    pub const ALL: [LandmarkRole; 5] = [
        LandmarkRole::LeftIrisCenter,
        LandmarkRole::RightIrisCenter,
        LandmarkRole::LeftEyeCorner,
        LandmarkRole::RightEyeCorner,
        LandmarkRole::NoseTip,
    ];

    /// Index of this role in a refined face mesh.
    pub fn mesh_index(self) -> usize {
        match self {
            LandmarkRole::LeftIrisCenter => 468,
            LandmarkRole::RightIrisCenter => 473,
            LandmarkRole::LeftEyeCorner => 33,
            LandmarkRole::RightEyeCorner => 263,
            LandmarkRole::NoseTip => 4,
        }
    }

    fn slot(self) -> usize {
        match self {
            LandmarkRole::LeftIrisCenter => 0,
            LandmarkRole::RightIrisCenter => 1,
            LandmarkRole::LeftEyeCorner => 2,
            LandmarkRole::RightEyeCorner => 3,
            LandmarkRole::NoseTip => 4,
        }
    }

    pub fn is_iris(self) -> bool {
        matches!(
            self,
            LandmarkRole::LeftIrisCenter | LandmarkRole::RightIrisCenter
        )
    }

    pub fn is_eye_corner(self) -> bool {
        matches!(
            self,
            LandmarkRole::LeftEyeCorner | LandmarkRole::RightEyeCorner
        )
    }
}

/// The landmarks gaze extraction needs, one per [`LandmarkRole`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GazeLandmarks {
    points: [Landmark; 5],
}

impl GazeLandmarks {
    /// Gather the role landmarks out of a raw face mesh.
    ///
    /// Fails with [`GazeplotError::LandmarkIndexOutOfRange`] when the mesh is
    /// too short to contain a role, e.g. a mesh produced without iris
    /// refinement, and with [`GazeplotError::Landmarks`] when a role point
    /// has a non-finite coordinate.
    pub fn from_mesh(mesh: &[Landmark]) -> GazeplotResult<Self> {
        let mut points = [Landmark::default(); 5];
        for role in LandmarkRole::ALL {
            let index = role.mesh_index();
            let landmark = mesh
                .get(index)
                .ok_or(GazeplotError::LandmarkIndexOutOfRange {
                    index,
                    len: mesh.len(),
                })?;
            if !(landmark.x.is_finite() && landmark.y.is_finite()) {
                return Err(GazeplotError::landmarks(format!(
                    "non-finite {role:?} at mesh index {index}"
                )));
            }
            points[role.slot()] = *landmark;
        }
        Ok(Self { points })
    }

    /// Build directly from role positions.
    pub fn from_roles(
        left_iris: Landmark,
        right_iris: Landmark,
        left_corner: Landmark,
        right_corner: Landmark,
        nose_tip: Landmark,
    ) -> Self {
        Self {
            points: [left_iris, right_iris, left_corner, right_corner, nose_tip],
        }
    }

    pub fn get(&self, role: LandmarkRole) -> Landmark {
        self.points[role.slot()]
    }

    /// `(role, landmark)` pairs in [`LandmarkRole::ALL`] order.
    pub fn iter(&self) -> impl Iterator<Item = (LandmarkRole, Landmark)> + '_ {
        LandmarkRole::ALL.iter().map(move |role| (*role, self.get(*role)))
    }
}

impl Index<LandmarkRole> for GazeLandmarks {
    type Output = Landmark;

    fn index(&self, role: LandmarkRole) -> &Landmark {
        &self.points[role.slot()]
    }
}

/// Build a refined-size mesh with every point at `fill`, then place the
/// given role landmarks. Used by tests and synthetic streams.
pub fn synthetic_mesh(fill: Landmark, roles: &[(LandmarkRole, Landmark)]) -> FaceMesh {
    let mut mesh = vec![fill; REFINED_MESH_LEN];
    for (role, landmark) in roles {
        mesh[role.mesh_index()] = *landmark;
    }
    mesh
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn role_indices_fit_refined_mesh() {
        for role in LandmarkRole::ALL {
            assert!(role.mesh_index() < REFINED_MESH_LEN);
        }
    }

    #[test]
    fn from_mesh_picks_role_points() {
        let mesh = synthetic_mesh(
            Landmark::new(0.5, 0.5),
            &[
                (LandmarkRole::LeftIrisCenter, Landmark::new(0.52, 0.40)),
                (LandmarkRole::RightEyeCorner, Landmark::new(0.50, 0.41)),
                (LandmarkRole::NoseTip, Landmark::with_depth(0.5, 0.6, -0.05)),
            ],
        );

        let gaze = GazeLandmarks::from_mesh(&mesh).unwrap();
        assert_eq!(gaze[LandmarkRole::LeftIrisCenter], Landmark::new(0.52, 0.40));
        assert_eq!(gaze.get(LandmarkRole::RightEyeCorner).y, 0.41);
        assert_eq!(gaze[LandmarkRole::NoseTip].z, -0.05);
        assert_eq!(gaze[LandmarkRole::LeftEyeCorner], Landmark::new(0.5, 0.5));
    }

    #[test]
    fn unrefined_mesh_is_rejected() {
        let mesh = vec![Landmark::default(); 468];
        let err = GazeLandmarks::from_mesh(&mesh).unwrap_err();
        match err {
            GazeplotError::LandmarkIndexOutOfRange { index, len } => {
                assert_eq!(index, 468);
                assert_eq!(len, 468);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn non_finite_role_point_is_rejected() {
        let mesh = synthetic_mesh(
            Landmark::new(0.5, 0.5),
            &[(LandmarkRole::RightIrisCenter, Landmark::new(f64::NAN, 0.4))],
        );
        let err = GazeLandmarks::from_mesh(&mesh).unwrap_err();
        assert!(matches!(err, GazeplotError::Landmarks { .. }));

        // Points outside the five roles are never read.
        let mut mesh = synthetic_mesh(Landmark::new(0.5, 0.5), &[]);
        mesh[0] = Landmark::new(f64::INFINITY, 0.0);
        assert!(GazeLandmarks::from_mesh(&mesh).is_ok());
    }

    #[test]
    fn landmark_z_defaults_when_missing() {
        let landmark: Landmark = serde_json::from_str(r#"{"x":0.1,"y":0.2}"#).unwrap();
        assert_eq!(landmark, Landmark::new(0.1, 0.2));
    }

    #[test]
    fn iter_follows_role_order() {
        let gaze = GazeLandmarks::from_roles(
            Landmark::new(0.0, 0.0),
            Landmark::new(1.0, 0.0),
            Landmark::new(2.0, 0.0),
            Landmark::new(3.0, 0.0),
            Landmark::new(4.0, 0.0),
        );
        let xs: Vec<f64> = gaze.iter().map(|(_, l)| l.x).collect();
        assert_eq!(xs, vec![0.0, 1.0, 2.0, 3.0, 4.0]);
        assert!(gaze.iter().filter(|(r, _)| r.is_iris()).count() == 2);
    }
}
