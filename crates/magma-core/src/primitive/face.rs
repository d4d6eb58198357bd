//! Cube faces and their local frames

use glam::Vec3;

/// One of the six axis-aligned cube faces, in generation order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Face {
    PosX,
    NegX,
    PosY,
    NegY,
    PosZ,
    NegZ,
}

impl Face {
    /// All faces in the order their vertex blocks appear in a mesh
    pub const ALL: [Face; 6] = [
        Face::PosX,
        Face::NegX,
        Face::PosY,
        Face::NegY,
        Face::PosZ,
        Face::NegZ,
    ];

    /// Position of this face in [`Face::ALL`]
    pub fn index(self) -> usize {
        self as usize
    }

    /// Axis the face is perpendicular to (0 = x, 1 = y, 2 = z)
    pub fn axis(self) -> usize {
        self.index() >> 1
    }

    /// Whether the outward normal points along the negative axis
    pub fn is_negative(self) -> bool {
        self.index() & 1 == 1
    }

    /// Outward unit normal
    pub fn normal(self) -> Vec3 {
        let mut normal = Vec3::ZERO;
        normal[self.axis()] = if self.is_negative() { -1.0 } else { 1.0 };
        normal
    }

    /// Face whose outward normal is exactly `normal`, if any
    pub fn from_normal(normal: Vec3) -> Option<Face> {
        Face::ALL.into_iter().find(|face| face.normal() == normal)
    }
}

/// In-plane grid directions `(dir1, dir2)` for a face.
///
/// Both are positive unit axes taken from the two axes other than the
/// face's own, cycling `(axis + 1) % 3` then `(axis + 2) % 3`. For negative
/// faces the pair is swapped so that `dir1 × dir2` always equals the face's
/// outward normal.
pub fn basis_for(face: Face) -> (Vec3, Vec3) {
    let axis = face.axis();
    let dir1 = Vec3::AXES[(axis + 1) % 3];
    let dir2 = Vec3::AXES[(axis + 2) % 3];
    if face.is_negative() {
        (dir2, dir1)
    } else {
        (dir1, dir2)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basis_is_right_handed() {
        for face in Face::ALL {
            let (dir1, dir2) = basis_for(face);
            assert_eq!(dir1.cross(dir2), face.normal(), "{face:?}");
            assert_eq!(dir1.dot(face.normal()), 0.0);
            assert_eq!(dir2.dot(face.normal()), 0.0);
        }
    }

    #[test]
    fn test_face_normals() {
        assert_eq!(Face::PosX.normal(), Vec3::X);
        assert_eq!(Face::NegX.normal(), Vec3::NEG_X);
        assert_eq!(Face::PosY.normal(), Vec3::Y);
        assert_eq!(Face::NegY.normal(), Vec3::NEG_Y);
        assert_eq!(Face::PosZ.normal(), Vec3::Z);
        assert_eq!(Face::NegZ.normal(), Vec3::NEG_Z);
    }

    #[test]
    fn test_from_normal() {
        for face in Face::ALL {
            assert_eq!(Face::from_normal(face.normal()), Some(face));
        }
        assert_eq!(Face::from_normal(Vec3::new(1.0, 1.0, 0.0)), None);
    }
}
