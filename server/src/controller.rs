use std::future::IntoFuture;
use std::marker::PhantomData;

// Pattern from https://github.com/HalsekiRaika/architectured/blob/e5caa5c7ae801d1aaac6e275b3ea0ef26d6ff26b/server/src/controller.rs

/// Turns a request into the DTO a service consumes.
pub trait Intake<I>: 'static + Sync + Send {
    type To;
    fn emit(&self, input: I) -> Self::To;
}

/// Turns a service result into a response.
pub trait Exhaust<I>: 'static + Sync + Send {
    type To;
    fn emit(&self, input: I) -> Self::To;
}

/// Like [`Exhaust`], for results that can still fail to present,
/// e.g. a lookup that came back empty.
pub trait TryExhaust<I>: 'static + Sync + Send {
    type To;
    type Error;
    fn emit(&self, input: I) -> Result<Self::To, Self::Error>;
}

pub struct Controller<T, P, I, D, O> {
    transformer: T,
    presenter: P,
    _input: PhantomData<I>,
    _dto: PhantomData<D>,
    _output: PhantomData<O>,
}

impl<T, P, I, D, O> Controller<T, P, I, D, O> {
    pub fn new(transformer: T, presenter: P) -> Self {
        Self {
            transformer,
            presenter,
            _input: PhantomData,
            _dto: PhantomData,
            _output: PhantomData,
        }
    }
}

impl<T, P, I, D, O> Controller<T, P, I, D, O>
where
    T: Intake<I, To = D>,
{
    pub fn intake(self, input: I) -> Transformed<P, D, O> {
        Transformed {
            dto: self.transformer.emit(input),
            presenter: self.presenter,
            _output: PhantomData,
        }
    }
}

impl<P, O> Controller<(), P, (), (), O>
where
    P: Exhaust<O>,
{
    /// Runs a service that takes no input.
    pub async fn bypass<F, Fut, E>(self, f: F) -> Result<P::To, E>
    where
        F: FnOnce() -> Fut,
        Fut: IntoFuture<Output = Result<O, E>>,
    {
        Ok(self.presenter.emit(f().await?))
    }
}

pub struct Transformed<P, D, O> {
    dto: D,
    presenter: P,
    _output: PhantomData<O>,
}

impl<P, D, O> Transformed<P, D, O>
where
    P: Exhaust<O>,
{
    pub async fn handle<F, Fut, E>(self, f: F) -> Result<P::To, E>
    where
        F: FnOnce(D) -> Fut,
        Fut: IntoFuture<Output = Result<O, E>>,
    {
        Ok(self.presenter.emit(f(self.dto).await?))
    }
}

impl<P, D, O> Transformed<P, D, O>
where
    P: TryExhaust<O>,
{
    pub async fn try_handle<F, Fut, E>(self, f: F) -> Result<P::To, P::Error>
    where
        F: FnOnce(D) -> Fut,
        Fut: IntoFuture<Output = Result<O, E>>,
        E: Into<P::Error>,
    {
        self.presenter.emit(f(self.dto).await.map_err(Into::into)?)
    }
}
