//! Construction followed by named-setter application.
//!
//! [`configure`] calls a factory, then applies a [`PropertyBag`] to the
//! result one key at a time. Each key must name a setter the object
//! advertises through [`Configurable`]; the first key that does not aborts
//! the call. Keys applied before a failure stay applied.

use std::collections::HashMap;
use std::fmt;

use crate::bag::PropertyBag;
use crate::error::{ConfigError, ConfigResult, ValueError};
use crate::value::PropValue;

/// A single-argument setter with receiver access.
pub type Setter<T> = fn(&mut T, PropValue) -> Result<(), ValueError>;

/// Objects whose setters can be looked up by name.
pub trait Configurable {
    /// Returns the setter registered under `name`, if the object has one.
    fn setter(&self, name: &str) -> Option<Setter<Self>>
    where
        Self: Sized;
}

/// A name-to-setter table, usually built once per type in a static.
///
/// # Example
///
/// ```rust
/// use chartkit_props::{Configurable, Setter, SetterRegistry};
/// use once_cell::sync::Lazy;
///
/// #[derive(Default)]
/// struct Gauge {
///     max: f64,
/// }
///
/// static SETTERS: Lazy<SetterRegistry<Gauge>> = Lazy::new(|| {
///     SetterRegistry::<Gauge>::new().with("max", |g, v| {
///         g.max = v.take_f64()?;
///         Ok(())
///     })
/// });
///
/// impl Configurable for Gauge {
///     fn setter(&self, name: &str) -> Option<Setter<Self>> {
///         SETTERS.get(name)
///     }
/// }
///
/// let props = chartkit_props::PropertyBag::new().with("max", 9.0);
/// let gauge = chartkit_props::construct(Gauge::default, props)?;
/// assert_eq!(gauge.max, 9.0);
/// # Ok::<(), chartkit_props::ConfigError>(())
/// ```
pub struct SetterRegistry<T> {
    setters: HashMap<&'static str, Setter<T>>,
}

impl<T> SetterRegistry<T> {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self {
            setters: HashMap::new(),
        }
    }

    /// Registers a setter, builder style.
    #[must_use]
    pub fn with(mut self, name: &'static str, setter: Setter<T>) -> Self {
        self.setters.insert(name, setter);
        self
    }

    /// Looks up a setter by exact name.
    pub fn get(&self, name: &str) -> Option<Setter<T>> {
        self.setters.get(name).copied()
    }

    /// Returns the registered names, sorted.
    pub fn names(&self) -> Vec<&'static str> {
        let mut names: Vec<_> = self.setters.keys().copied().collect();
        names.sort_unstable();
        names
    }

    /// Returns the number of registered setters.
    pub fn len(&self) -> usize {
        self.setters.len()
    }

    /// Returns true if no setter is registered.
    pub fn is_empty(&self) -> bool {
        self.setters.is_empty()
    }
}

impl<T> Default for SetterRegistry<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> fmt::Debug for SetterRegistry<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SetterRegistry")
            .field("setters", &self.names())
            .finish()
    }
}

/// A factory callable with a tuple of arguments.
///
/// Implemented for every `FnOnce` taking zero to four arguments, so plain
/// functions, constructors and closures all qualify.
pub trait Factory<Args> {
    /// The constructed type.
    type Output;

    /// Calls the factory.
    fn construct(self, args: Args) -> Self::Output;
}

macro_rules! impl_factory {
    ($($arg:ident),*) => {
        impl<Func, Out, $($arg),*> Factory<($($arg,)*)> for Func
        where
            Func: FnOnce($($arg),*) -> Out,
        {
            type Output = Out;

            #[allow(non_snake_case)]
            fn construct(self, ($($arg,)*): ($($arg,)*)) -> Out {
                self($($arg),*)
            }
        }
    };
}

impl_factory!();
impl_factory!(A);
impl_factory!(A, B);
impl_factory!(A, B, C);
impl_factory!(A, B, C, D);

/// Calls `factory` with `args`, then applies `props` to the result.
///
/// # Errors
///
/// - [`ConfigError::UnknownSetter`] for the first key the object has no
///   setter for.
/// - [`ConfigError::InvalidValue`] when a setter rejects its value. The
///   setter's own [`ValueError`] is kept unmodified as `source`, and is also
///   reachable through [`std::error::Error::source`].
///
/// Properties before the failing key have already been applied to the
/// object, which is then dropped.
///
/// # Example
///
/// ```rust
/// use chartkit_props::{configure, PropValue, PropertyBag};
/// use chartkit_shape::Line;
///
/// let props = PropertyBag::new()
///     .with("x", PropValue::accessor(|d: &[f64; 2], _, _| d[0] * 10.0))
///     .with("y", PropValue::accessor(|d: &[f64; 2], _, _| d[1] * 20.0));
///
/// let line = configure(Line::<[f64; 2]>::new, (), props)?;
/// let d = line.generate(&[[0.0, 0.0], [1.0, 1.0], [2.0, 2.0]]);
/// assert_eq!(d.as_deref(), Some("M0,0L10,20L20,40"));
/// # Ok::<(), chartkit_props::ConfigError>(())
/// ```
pub fn configure<F, Args>(factory: F, args: Args, props: PropertyBag) -> ConfigResult<F::Output>
where
    F: Factory<Args>,
    F::Output: Configurable,
{
    let mut target = factory.construct(args);
    apply_props(&mut target, props)?;
    Ok(target)
}

/// Calls a fallible factory with `args`, then applies `props` to the result.
///
/// A factory error is returned as is, without being applied or wrapped.
/// Configuration failures are converted into the factory's error type.
///
/// # Example
///
/// ```rust
/// use chartkit_props::{try_configure, ConfigError, PropertyBag};
/// use chartkit_shape::{ScaleTime, ShapeError};
/// use chrono::{DateTime, TimeZone, Utc};
///
/// #[derive(Debug)]
/// enum ChartError {
///     Shape(ShapeError),
///     Config(ConfigError),
/// }
///
/// impl From<ShapeError> for ChartError {
///     fn from(e: ShapeError) -> Self {
///         Self::Shape(e)
///     }
/// }
///
/// impl From<ConfigError> for ChartError {
///     fn from(e: ConfigError) -> Self {
///         Self::Config(e)
///     }
/// }
///
/// let start = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
/// let end = Utc.with_ymd_and_hms(2024, 1, 11, 0, 0, 0).unwrap();
/// let props = PropertyBag::new().with("range", vec![0.0, 100.0]);
///
/// let scale = try_configure(
///     |domain: [DateTime<Utc>; 2]| ScaleTime::try_from(domain).map_err(ChartError::from),
///     ([start, end],),
///     props,
/// )?;
/// assert_eq!(scale.scale(&end), 100.0);
/// # Ok::<(), ChartError>(())
/// ```
pub fn try_configure<F, Args, T, E>(factory: F, args: Args, props: PropertyBag) -> Result<T, E>
where
    F: Factory<Args, Output = Result<T, E>>,
    T: Configurable,
    E: From<ConfigError>,
{
    let mut target = factory.construct(args)?;
    apply_props(&mut target, props)?;
    Ok(target)
}

/// Calls a zero-argument factory, then applies `props`.
pub fn construct<F, T>(factory: F, props: PropertyBag) -> ConfigResult<T>
where
    F: FnOnce() -> T,
    T: Configurable,
{
    configure(factory, (), props)
}

/// Applies `props` to an existing object, in bag order.
///
/// Stops at the first failure without undoing earlier setters.
pub fn apply_props<T: Configurable>(target: &mut T, props: PropertyBag) -> ConfigResult<()> {
    let type_name = std::any::type_name::<T>();

    for (key, value) in props {
        let Some(setter) = target.setter(&key) else {
            log::debug!("{type_name} has no setter '{key}'");
            return Err(ConfigError::unknown_setter(key));
        };

        log::trace!("{type_name}.{key}({})", value.type_name());
        if let Err(source) = setter(target, value) {
            log::debug!("{type_name}.{key} rejected its value: {source}");
            return Err(ConfigError::invalid_value(key, source));
        }
    }

    Ok(())
}
