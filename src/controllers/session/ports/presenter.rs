use crate::controllers::session::data::frame::Frame;

pub trait FramePresenterPort {
    fn present(&mut self, frame: &Frame) -> std::io::Result<()>;
}
