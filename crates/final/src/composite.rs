//! Composite final models built from ordered tuples of child models.
//!
//! A tuple of models is itself a model: `new` lays the children out at
//! contiguous running-sum offsets, `SIZE` is the sum of child widths, and
//! `verify`/`get`/`set` aggregate over the children in offset order. Tuples
//! nest, so arbitrarily deep fixed layouts compose from the same contract.
//!
//! Struct codecs generated from a schema follow the identical shape with
//! named child fields; the tuple impls are the reusable core of that
//! pattern.

use fixbin_buffers::Buffer;

use crate::error::VerifyError;
use crate::model::{FinalModel, Size};

macro_rules! impl_final_model_tuple {
    ($first:ident $firstidx:tt $(, $rest:ident $restidx:tt)*) => {
        impl<$first: FinalModel $(, $rest: FinalModel)*> FinalModel
            for ($first, $($rest,)*)
        {
            type Value = ($first::Value, $($rest::Value,)*);

            const SIZE: usize = $first::SIZE $(+ $rest::SIZE)*;

            fn new(offset: usize) -> Self {
                let mut child_offset = offset;
                let model = (
                    {
                        let child = <$first>::new(child_offset);
                        child_offset += $first::SIZE;
                        child
                    },
                    $(
                        {
                            let child = <$rest>::new(child_offset);
                            child_offset += $rest::SIZE;
                            child
                        },
                    )*
                );
                let _ = child_offset;
                model
            }

            #[inline]
            fn fbe_offset(&self) -> usize {
                self.$firstidx.fbe_offset()
            }

            fn verify(&self, buffer: &Buffer) -> Result<usize, VerifyError> {
                Ok(self.$firstidx.verify(buffer)?
                    $(+ self.$restidx.verify(buffer)?)*)
            }

            fn get(&self, buffer: &Buffer, size: &mut Size) -> Self::Value {
                let mut total = 0usize;
                let value = (
                    {
                        let mut child_size = Size::new();
                        let child = self.$firstidx.get(buffer, &mut child_size);
                        total += child_size.value;
                        child
                    },
                    $(
                        {
                            let mut child_size = Size::new();
                            let child = self.$restidx.get(buffer, &mut child_size);
                            total += child_size.value;
                            child
                        },
                    )*
                );
                size.value = total;
                value
            }

            fn set(&self, buffer: &mut Buffer, value: &Self::Value) -> usize {
                self.$firstidx.set(buffer, &value.$firstidx)
                    $(+ self.$restidx.set(buffer, &value.$restidx))*
            }
        }
    };
}

impl_final_model_tuple!(A 0);
impl_final_model_tuple!(A 0, B 1);
impl_final_model_tuple!(A 0, B 1, C 2);
impl_final_model_tuple!(A 0, B 1, C 2, D 3);
impl_final_model_tuple!(A 0, B 1, C 2, D 3, E 4);
impl_final_model_tuple!(A 0, B 1, C 2, D 3, E 4, F 5);
impl_final_model_tuple!(A 0, B 1, C 2, D 3, E 4, F 5, G 6);
impl_final_model_tuple!(A 0, B 1, C 2, D 3, E 4, F 5, G 6, H 7);
