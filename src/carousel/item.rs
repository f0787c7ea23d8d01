/// An entry the carousel can show.
///
/// The engine only needs a stable identifier; everything else about the
/// item is display payload it never looks at.
pub trait CarouselItem: Clone + PartialEq + Send + 'static {
    fn item_id(&self) -> &str;
}
