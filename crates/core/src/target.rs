//! Output targets: one file-system artifact for the generator to produce.

use crate::model::{ItemModel, PropertyFile};

/// Copies run before anything that might overwrite their source name.
pub const COPY_PRIORITY: i32 = 0;
/// Model files.
pub const MODEL_PRIORITY: i32 = 1;
/// CIT property files.
pub const PROPERTIES_PRIORITY: i32 = 2;

/// Kind of artifact.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TargetKind {
    /// Override-based model JSON.
    ModelWithOverrides,
    /// CIT `.properties` file.
    PropertyFile,
    /// Animated 3D model copied verbatim; optional.
    Enhanced3dModelCopy,
    /// Original model kept under a `_3d` name before being overwritten.
    Preserved3dModelCopy,
    /// Texture copied verbatim.
    PlainTextureCopy,
}

/// Serialized payload of a target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TargetContent {
    /// Model JSON.
    Model(ItemModel),
    /// Property file lines.
    Properties(PropertyFile),
}

/// One artifact to produce, relative to the pack root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputTarget {
    /// Artifact kind.
    pub kind: TargetKind,
    /// Path relative to the pack root, `/`-separated.
    pub file: String,
    /// `None` means copy verbatim from the source pack.
    pub content: Option<TargetContent>,
    /// Lower runs first.
    pub priority: i32,
}

impl OutputTarget {
    /// Model file target.
    pub fn model(file: impl Into<String>, model: ItemModel) -> Self {
        Self {
            kind: TargetKind::ModelWithOverrides,
            file: file.into(),
            content: Some(TargetContent::Model(model)),
            priority: MODEL_PRIORITY,
        }
    }

    /// Property file target.
    pub fn properties(file: impl Into<String>, props: PropertyFile) -> Self {
        Self {
            kind: TargetKind::PropertyFile,
            file: file.into(),
            content: Some(TargetContent::Properties(props)),
            priority: PROPERTIES_PRIORITY,
        }
    }

    /// Verbatim copy target.
    pub fn copy(kind: TargetKind, file: impl Into<String>) -> Self {
        Self {
            kind,
            file: file.into(),
            content: None,
            priority: COPY_PRIORITY,
        }
    }

    /// Model payload, if this is a model target.
    pub fn as_model(&self) -> Option<&ItemModel> {
        match &self.content {
            Some(TargetContent::Model(model)) => Some(model),
            _ => None,
        }
    }

    /// Property payload, if this is a property-file target.
    pub fn as_properties(&self) -> Option<&PropertyFile> {
        match &self.content {
            Some(TargetContent::Properties(props)) => Some(props),
            _ => None,
        }
    }
}
