use semval::{context::Context, Invalidity, Validate};

pub trait ValidateContextExt {
	type Invalidity: Invalidity;

	/// Validate all items in an iterator, tagging each invalidity with its index.
	fn validate_iter<'a, F, U, I, II: 'a>(self, target: I, map: F) -> Self
	where
		F: Fn(usize, U) -> Self::Invalidity,
		U: Invalidity,
		I: IntoIterator<Item = &'a II>,
		II: Validate<Invalidity = U>;
}

impl<V: Invalidity> ValidateContextExt for Context<V> {
	type Invalidity = V;

	fn validate_iter<'a, F, U, I, II: 'a>(self, target: I, map: F) -> Self
	where
		F: Fn(usize, U) -> Self::Invalidity,
		U: Invalidity,
		I: IntoIterator<Item = &'a II>,
		II: Validate<Invalidity = U>,
	{
		let mut ret = self;

		for (index, item) in target.into_iter().enumerate() {
			ret = ret.validate_with(item, |v| map(index, v));
		}

		ret
	}
}
