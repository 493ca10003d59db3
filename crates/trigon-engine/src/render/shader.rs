use super::RenderError;

/// A compiled shader module plus the entry points declared in its source.
///
/// Pipelines resolve entry points by name through [`entry_point`]; a missing
/// function surfaces as [`RenderError::ShaderMissing`] before pipeline
/// creation rather than as an opaque validation failure afterwards.
///
/// [`entry_point`]: ShaderLibrary::entry_point
pub struct ShaderLibrary {
    module: wgpu::ShaderModule,
    entry_points: Vec<String>,
}

impl ShaderLibrary {
    /// Compiles `source` (WGSL) and records its vertex/fragment entry points.
    pub fn new(device: &wgpu::Device, label: &str, source: &str) -> Self {
        let module = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some(label),
            source: wgpu::ShaderSource::Wgsl(source.into()),
        });

        Self {
            module,
            entry_points: scan_entry_points(source),
        }
    }

    pub fn module(&self) -> &wgpu::ShaderModule {
        &self.module
    }

    /// Resolves a named entry point, failing if the source never declared it.
    pub fn entry_point<'a>(&self, name: &'a str) -> Result<&'a str, RenderError> {
        if self.entry_points.iter().any(|e| e == name) {
            Ok(name)
        } else {
            Err(RenderError::ShaderMissing { name: name.to_string() })
        }
    }
}

/// Collects the names of `@vertex` / `@fragment` functions in WGSL source.
///
/// Token-level scan: a stage attribute arms the scanner, the following `fn`
/// token selects the next token as the function name (trimmed at the
/// parameter list). Sufficient for the embedded libraries this crate ships.
fn scan_entry_points(source: &str) -> Vec<String> {
    let mut entries = Vec::new();
    let mut stage_seen = false;
    let mut fn_seen = false;

    for token in source.split_whitespace() {
        if token == "@vertex" || token == "@fragment" {
            stage_seen = true;
            fn_seen = false;
        } else if stage_seen && !fn_seen {
            if token == "fn" {
                fn_seen = true;
            } else if !token.starts_with('@') {
                // Some other declaration followed the attribute.
                stage_seen = false;
            }
        } else if fn_seen {
            let name: String = token
                .chars()
                .take_while(|c| c.is_alphanumeric() || *c == '_')
                .collect();
            if !name.is_empty() {
                entries.push(name);
            }
            stage_seen = false;
            fn_seen = false;
        }
    }

    entries
}

#[cfg(test)]
mod tests {
    use super::*;

    const TRIANGLE_WGSL: &str = include_str!("shaders/triangle.wgsl");

    #[test]
    fn triangle_library_declares_both_named_functions() {
        let entries = scan_entry_points(TRIANGLE_WGSL);
        assert!(entries.iter().any(|e| e == "vertexShader"));
        assert!(entries.iter().any(|e| e == "fragmentShader"));
    }

    #[test]
    fn scan_ignores_helper_functions() {
        let src = "fn helper(x: f32) -> f32 { return x; }\n\
                   @vertex fn vs(@location(0) p: vec3<f32>) -> @builtin(position) vec4<f32> {\n\
                       return vec4<f32>(p, 1.0);\n\
                   }";
        assert_eq!(scan_entry_points(src), vec!["vs".to_string()]);
    }

    #[test]
    fn scan_handles_attribute_on_its_own_line() {
        let src = "@fragment\nfn shade() -> @location(0) vec4<f32> {\n\
                       return vec4<f32>(1.0);\n\
                   }";
        assert_eq!(scan_entry_points(src), vec!["shade".to_string()]);
    }

    #[test]
    fn scan_of_source_missing_a_stage_finds_nothing() {
        assert!(scan_entry_points("fn lonely() {}").is_empty());
    }
}
