use crate::guard::capability::{Emptiness, Numeric};
use crate::guard::Guard;
use crate::rail::Rail;
use crate::types::Error;
use alloc::format;
use core::any::type_name;
use core::cmp::Ordering;

fn reject<T>(description: alloc::string::String) -> Rail<T, Error> {
    Rail::failure(Error::unprocessable(description))
}

fn empty<T: Emptiness>(input: T, parameter: &str) -> Rail<T, Error> {
    if input.is_empty_value() {
        reject(format!("Required input {parameter} was empty."))
    } else {
        Rail::success(input)
    }
}

fn white_space<T: AsRef<str>>(input: T, parameter: &str) -> Rail<T, Error> {
    if input.as_ref().trim().is_empty() {
        reject(format!("Required input {parameter} was white space."))
    } else {
        Rail::success(input)
    }
}

fn ordered_range<T: PartialOrd>(range_from: &T, range_to: &T) -> Rail<(), Error> {
    match range_from.partial_cmp(range_to) {
        Some(Ordering::Less | Ordering::Equal) => Rail::success(()),
        _ => reject("range_from should be less than or equal to range_to".into()),
    }
}

fn within<T: PartialOrd>(
    input: &T,
    parameter: &str,
    range_from: &T,
    range_to: &T,
) -> Rail<(), Error> {
    let above_floor = matches!(
        input.partial_cmp(range_from),
        Some(Ordering::Greater | Ordering::Equal)
    );
    let below_ceiling = matches!(
        input.partial_cmp(range_to),
        Some(Ordering::Less | Ordering::Equal)
    );
    if above_floor && below_ceiling {
        Rail::success(())
    } else {
        reject(format!("Input {parameter} was out of range."))
    }
}

/// `Some(ordering)` of `input` against zero, `None` when incomparable.
fn sign<T: Numeric>(input: T) -> Option<Ordering> {
    input.partial_cmp(&T::zero())
}

impl Guard {
    /// Fails iff `input` is absent.
    ///
    /// # Examples
    ///
    /// ```
    /// use rail_track::guard::Guard;
    ///
    /// assert!(Guard.is_null(Some(""), "name").is_success());
    /// assert!(Guard.is_null(None::<&str>, "name").is_failure());
    /// ```
    pub fn is_null<T>(&self, input: Option<T>, parameter: &str) -> Rail<T, Error> {
        match input {
            Some(value) => Rail::success(value),
            None => reject(format!("Required input {parameter} was null.")),
        }
    }

    /// Fails iff `input` is absent or empty.
    ///
    /// Works for strings as well as sequences and maps.
    ///
    /// # Examples
    ///
    /// ```
    /// use rail_track::guard::Guard;
    ///
    /// assert!(Guard.is_null_or_empty(Some("x"), "name").is_success());
    /// assert!(Guard.is_null_or_empty(Some(""), "name").is_failure());
    /// assert!(Guard.is_null_or_empty(Some(Vec::<u8>::new()), "bytes").is_failure());
    /// ```
    pub fn is_null_or_empty<T: Emptiness>(
        &self,
        input: Option<T>,
        parameter: &str,
    ) -> Rail<T, Error> {
        self.is_null(input, parameter)
            .bind(|value| empty(value, parameter))
    }

    /// Fails iff `input` is absent, empty, or entirely white space.
    ///
    /// # Examples
    ///
    /// ```
    /// use rail_track::guard::Guard;
    ///
    /// assert!(Guard.is_null_or_white_space(Some(" leading"), "name").is_success());
    /// assert!(Guard.is_null_or_white_space(Some(" \t\n"), "name").is_failure());
    /// ```
    pub fn is_null_or_white_space<T>(&self, input: Option<T>, parameter: &str) -> Rail<T, Error>
    where
        T: Emptiness + AsRef<str>,
    {
        self.is_null_or_empty(input, parameter)
            .bind(|value| white_space(value, parameter))
    }

    /// Fails when the range is malformed (`range_from > range_to`) or when
    /// `input` lies outside `[range_from, range_to]`. Bounds are inclusive.
    ///
    /// A malformed range is reported alone; see
    /// [`Guard::is_out_of_range_acc`] to report both problems.
    ///
    /// # Examples
    ///
    /// ```
    /// use rail_track::guard::Guard;
    ///
    /// assert!(Guard.is_out_of_range(1, "n", 1, 3).is_success());
    /// assert!(Guard.is_out_of_range(0, "n", 1, 3).is_failure());
    /// assert!(Guard.is_out_of_range(2, "n", 3, 1).is_failure());
    /// ```
    pub fn is_out_of_range<T: PartialOrd>(
        &self,
        input: T,
        parameter: &str,
        range_from: T,
        range_to: T,
    ) -> Rail<T, Error> {
        ordered_range(&range_from, &range_to)
            .bind(|()| within(&input, parameter, &range_from, &range_to))
            .map(|()| input)
    }

    /// Like [`Guard::is_out_of_range`] but evaluates both the range shape and
    /// the bounds check, reporting every failure.
    ///
    /// # Examples
    ///
    /// ```
    /// use rail_track::guard::Guard;
    ///
    /// let rail = Guard.is_out_of_range_acc(4, "n", 3, 1);
    /// assert_eq!(rail.into_messages().unwrap().len(), 2);
    /// ```
    pub fn is_out_of_range_acc<T: PartialOrd>(
        &self,
        input: T,
        parameter: &str,
        range_from: T,
        range_to: T,
    ) -> Rail<T, Error> {
        let bounds = within(&input, parameter, &range_from, &range_to);
        ordered_range(&range_from, &range_to)
            .acc(|_| bounds)
            .map(|()| input)
    }

    /// Resolves a raw discriminant into the enum `E`, failing when it names
    /// none of `E`'s variants.
    ///
    /// Membership is whatever `E`'s `TryFrom<R>` accepts.
    ///
    /// # Examples
    ///
    /// ```
    /// use rail_track::guard::Guard;
    ///
    /// #[derive(Debug, PartialEq)]
    /// enum Color { Red, Green }
    ///
    /// impl TryFrom<i32> for Color {
    ///     type Error = ();
    ///     fn try_from(raw: i32) -> Result<Self, ()> {
    ///         match raw {
    ///             0 => Ok(Color::Red),
    ///             1 => Ok(Color::Green),
    ///             _ => Err(()),
    ///         }
    ///     }
    /// }
    ///
    /// assert_eq!(Guard.is_enum_out_of_range::<Color, _>(1, "color").into_value(), Some(Color::Green));
    /// assert!(Guard.is_enum_out_of_range::<Color, _>(7, "color").is_failure());
    /// ```
    pub fn is_enum_out_of_range<E, R>(&self, raw: R, parameter: &str) -> Rail<E, Error>
    where
        E: TryFrom<R>,
    {
        match E::try_from(raw) {
            Ok(value) => Rail::success(value),
            Err(_) => reject(format!(
                "Required input {parameter} was not a valid enum value for {}.",
                type_name::<E>()
            )),
        }
    }

    /// Fails iff `input` equals zero.
    ///
    /// # Examples
    ///
    /// ```
    /// use rail_track::guard::Guard;
    ///
    /// assert!(Guard.is_zero(0, "n").is_failure());
    /// assert!(Guard.is_zero(-1, "n").is_success());
    /// assert!(Guard.is_zero(0.0_f64, "x").is_failure());
    /// ```
    pub fn is_zero<T: Numeric>(&self, input: T, parameter: &str) -> Rail<T, Error> {
        if input == T::zero() {
            reject(format!("Required input {parameter} cannot be zero."))
        } else {
            Rail::success(input)
        }
    }

    /// Fails iff `input < 0`. Zero passes; NaN fails.
    ///
    /// # Examples
    ///
    /// ```
    /// use rail_track::guard::Guard;
    ///
    /// assert!(Guard.is_negative(0, "n").is_success());
    /// assert!(Guard.is_negative(-1, "n").is_failure());
    /// ```
    pub fn is_negative<T: Numeric>(&self, input: T, parameter: &str) -> Rail<T, Error> {
        match sign(input) {
            Some(Ordering::Greater | Ordering::Equal) => Rail::success(input),
            _ => reject(format!("Required input {parameter} cannot be negative.")),
        }
    }

    /// Fails iff `input <= 0`. NaN fails.
    ///
    /// # Examples
    ///
    /// ```
    /// use rail_track::guard::Guard;
    ///
    /// assert!(Guard.is_negative_or_zero(1_i64, "n").is_success());
    /// assert!(Guard.is_negative_or_zero(0_i64, "n").is_failure());
    /// ```
    pub fn is_negative_or_zero<T: Numeric>(&self, input: T, parameter: &str) -> Rail<T, Error> {
        match sign(input) {
            Some(Ordering::Greater) => Rail::success(input),
            _ => reject(format!("Required input {parameter} cannot be zero or negative.")),
        }
    }

    /// Fails iff `input` equals `T::default()`.
    ///
    /// # Examples
    ///
    /// ```
    /// use rail_track::guard::Guard;
    ///
    /// assert!(Guard.is_default(String::new(), "s").is_failure());
    /// assert!(Guard.is_default(1_u8, "n").is_success());
    /// ```
    pub fn is_default<T: Default + PartialEq>(
        &self,
        input: T,
        parameter: &str,
    ) -> Rail<T, Error> {
        if input == T::default() {
            reject(format!(
                "Input [{parameter}] is default value for type {}",
                type_name::<T>()
            ))
        } else {
            Rail::success(input)
        }
    }
}
