//! Skeleton model - declarative bone tree
//!
//! Bones live in a flat arena addressed by `BoneId`. Each bone stores the
//! ids of its children in document order; the root is always id 0.
//! Coordinates are relative to the parent's end point (the root is relative
//! to the spawn origin).

use std::fmt::Write as _;

use super::vec2::Vec2;

pub type BoneId = usize;

/// Collider shape a bone turns into
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ShapeKind {
    Box,
    Circle,
}

impl ShapeKind {
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "box" => Some(ShapeKind::Box),
            "circle" => Some(ShapeKind::Circle),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ShapeKind::Box => "box",
            ShapeKind::Circle => "circle",
        }
    }
}

/// Lateral layer of a limb (selects its collision side)
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Layer {
    #[default]
    Middle,
    Left,
    Right,
}

impl Layer {
    pub const ALL: [Layer; 3] = [Layer::Middle, Layer::Left, Layer::Right];

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "middle" => Some(Layer::Middle),
            "left" => Some(Layer::Left),
            "right" => Some(Layer::Right),
            _ => None,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Bone {
    /// Display name, not required to be unique
    pub name: String,
    pub start: Vec2,
    pub end: Vec2,
    pub width: f32,
    pub shape: ShapeKind,
    pub layer: Layer,
    pub(crate) parent: Option<BoneId>,
    pub(crate) children: Vec<BoneId>,
}

impl Bone {
    pub fn new(name: impl Into<String>, start: Vec2, end: Vec2, width: f32, shape: ShapeKind) -> Self {
        Self {
            name: name.into(),
            start,
            end,
            width,
            shape,
            layer: Layer::Middle,
            parent: None,
            children: Vec::new(),
        }
    }

    pub fn with_layer(mut self, layer: Layer) -> Self {
        self.layer = layer;
        self
    }

    pub fn parent(&self) -> Option<BoneId> {
        self.parent
    }

    pub fn children(&self) -> &[BoneId] {
        &self.children
    }

    pub fn is_root(&self) -> bool {
        self.parent.is_none()
    }
}

/// Bone tree stored as an arena
#[derive(Clone, Debug, PartialEq)]
pub struct Skeleton {
    bones: Vec<Bone>,
}

impl Skeleton {
    pub const ROOT: BoneId = 0;

    /// Start a skeleton from its root bone.
    pub fn new(mut root: Bone) -> Self {
        root.parent = None;
        root.children.clear();
        Self { bones: vec![root] }
    }

    /// Append `bone` as the last child of `parent`.
    ///
    /// Returns `None` if `parent` does not exist.
    pub fn add_child(&mut self, parent: BoneId, mut bone: Bone) -> Option<BoneId> {
        if parent >= self.bones.len() {
            return None;
        }
        let id = self.bones.len();
        bone.parent = Some(parent);
        bone.children.clear();
        self.bones.push(bone);
        self.bones[parent].children.push(id);
        Some(id)
    }

    pub fn root(&self) -> &Bone {
        &self.bones[Self::ROOT]
    }

    pub fn get(&self, id: BoneId) -> Option<&Bone> {
        self.bones.get(id)
    }

    pub fn len(&self) -> usize {
        self.bones.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bones.is_empty()
    }

    pub fn bones(&self) -> &[Bone] {
        &self.bones
    }

    pub fn find(&self, name: &str) -> Option<BoneId> {
        self.bones.iter().position(|b| b.name == name)
    }

    pub fn depth(&self, id: BoneId) -> usize {
        let mut depth = 0;
        let mut cur = self.bones.get(id).and_then(|b| b.parent);
        while let Some(p) = cur {
            depth += 1;
            cur = self.bones[p].parent;
        }
        depth
    }

    /// Depth-first pre-order walk, children in document order.
    pub fn pre_order(&self) -> Vec<BoneId> {
        let mut order = Vec::with_capacity(self.bones.len());
        let mut stack = vec![Self::ROOT];
        while let Some(id) = stack.pop() {
            order.push(id);
            for &child in self.bones[id].children.iter().rev() {
                stack.push(child);
            }
        }
        order
    }

    /// One bone name per line, tab-indented by depth.
    pub fn outline(&self) -> String {
        let mut out = String::new();
        for id in self.pre_order() {
            for _ in 0..self.depth(id) {
                out.push('\t');
            }
            let _ = writeln!(out, "{}", self.bones[id].name);
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seg(name: &str) -> Bone {
        Bone::new(name, Vec2::zero(), Vec2::new(0.0, 1.0), 0.2, ShapeKind::Box)
    }

    #[test]
    fn pre_order_follows_document_order() {
        let mut sk = Skeleton::new(seg("torso"));
        let head = sk.add_child(Skeleton::ROOT, seg("head")).unwrap();
        let arm = sk.add_child(Skeleton::ROOT, seg("arm")).unwrap();
        let hand = sk.add_child(arm, seg("hand")).unwrap();
        sk.add_child(head, seg("hat")).unwrap();

        let names: Vec<&str> = sk.pre_order().iter().map(|&i| sk.bones()[i].name.as_str()).collect();
        assert_eq!(names, vec!["torso", "head", "hat", "arm", "hand"]);
        assert_eq!(sk.depth(hand), 2);
        assert_eq!(sk.get(hand).unwrap().parent(), Some(arm));
    }

    #[test]
    fn add_child_rejects_unknown_parent() {
        let mut sk = Skeleton::new(seg("torso"));
        assert!(sk.add_child(7, seg("ghost")).is_none());
        assert_eq!(sk.len(), 1);
    }

    #[test]
    fn outline_indents_by_depth() {
        let mut sk = Skeleton::new(seg("torso"));
        let arm = sk.add_child(Skeleton::ROOT, seg("arm")).unwrap();
        sk.add_child(arm, seg("hand")).unwrap();
        assert_eq!(sk.outline(), "torso\n\tarm\n\t\thand\n");
    }

    #[test]
    fn layer_and_shape_parse() {
        assert_eq!(Layer::parse("left"), Some(Layer::Left));
        assert_eq!(Layer::parse("up"), None);
        assert_eq!(ShapeKind::parse("circle"), Some(ShapeKind::Circle));
        assert_eq!(ShapeKind::parse("triangle"), None);
    }
}
