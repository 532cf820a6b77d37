/// High-level response after a surface error.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum SurfaceErrorAction {
    /// Surface was reconfigured; rendering may resume next frame.
    Reconfigured,
    /// Transient error; skip the current frame.
    SkipFrame,
    /// Fatal error (commonly OOM); terminate gracefully.
    Fatal,
}

impl SurfaceErrorAction {
    /// Classifies a surface error without touching the surface.
    ///
    /// `Reconfigured` means the caller must reconfigure before the next frame.
    pub fn classify(err: &wgpu::SurfaceError) -> Self {
        match err {
            wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated => {
                SurfaceErrorAction::Reconfigured
            }
            wgpu::SurfaceError::OutOfMemory => SurfaceErrorAction::Fatal,
            wgpu::SurfaceError::Timeout | wgpu::SurfaceError::Other => {
                SurfaceErrorAction::SkipFrame
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use wgpu::SurfaceError;

    fn classify(err: SurfaceError) -> SurfaceErrorAction {
        SurfaceErrorAction::classify(&err)
    }

    #[test]
    fn lost_and_outdated_reconfigure() {
        assert_eq!(classify(SurfaceError::Lost), SurfaceErrorAction::Reconfigured);
        assert_eq!(classify(SurfaceError::Outdated), SurfaceErrorAction::Reconfigured);
    }

    #[test]
    fn oom_is_fatal() {
        assert_eq!(classify(SurfaceError::OutOfMemory), SurfaceErrorAction::Fatal);
    }

    #[test]
    fn timeout_skips() {
        assert_eq!(classify(SurfaceError::Timeout), SurfaceErrorAction::SkipFrame);
        assert_eq!(classify(SurfaceError::Other), SurfaceErrorAction::SkipFrame);
    }
}
