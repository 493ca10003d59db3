use std::fmt;

/// Errors produced while constructing or driving the triangle renderer.
///
/// Every failure in the init and draw paths is a value; the binary decides
/// whether a kind is fatal.
#[derive(Debug, Clone, PartialEq)]
pub enum RenderError {
    /// No usable adapter/device/queue could be acquired.
    DeviceUnavailable { message: String },
    /// The shader library does not expose the named entry point.
    ShaderMissing { name: String },
    /// Pipeline state compilation failed validation.
    PipelineCompileFailed { message: String },
    /// The surface could not provide a drawable for the current frame.
    DrawableUnavailable { message: String },
}

impl fmt::Display for RenderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RenderError::DeviceUnavailable { message } => {
                write!(f, "GPU device unavailable: {message}")
            }
            RenderError::ShaderMissing { name } => {
                write!(f, "shader library has no entry point named `{name}`")
            }
            RenderError::PipelineCompileFailed { message } => {
                write!(f, "failed to compile render pipeline: {message}")
            }
            RenderError::DrawableUnavailable { message } => {
                write!(f, "no drawable available for this frame: {message}")
            }
        }
    }
}

impl std::error::Error for RenderError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_surfaces_the_platform_message() {
        let err = RenderError::PipelineCompileFailed {
            message: "vertex attribute 1 has no matching shader input".to_string(),
        };
        let text = err.to_string();
        assert!(text.contains("render pipeline"));
        assert!(text.contains("vertex attribute 1"));
    }

    #[test]
    fn display_names_the_missing_entry_point() {
        let err = RenderError::ShaderMissing { name: "fragmentShader".to_string() };
        assert!(err.to_string().contains("`fragmentShader`"));
    }
}
