/// Connects a child message enum to its parent so it can be queued anywhere a `Message` is accepted.
///
/// # Example
///
/// ```ignore
/// impl_message!(Message, Document, DocumentMessage);
/// ```
///
/// expands to:
/// ```ignore
/// impl From<DocumentMessage> for Message {
///     fn from(message: DocumentMessage) -> Self {
///         Message::Document(message)
///     }
/// }
/// ```
macro_rules! impl_message {
	($parent:ident, $variant:ident, $child:ty) => {
		impl From<$child> for $parent {
			fn from(message: $child) -> Self {
				$parent::$variant(message)
			}
		}
	};
}
