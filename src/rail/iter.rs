use crate::rail::core::Rail;

pub struct Iter<'a, S> {
    inner: Option<&'a S>,
}

impl<'a, S> Iterator for Iter<'a, S> {
    type Item = &'a S;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.take()
    }
}

pub struct IntoIter<S> {
    inner: Option<S>,
}

impl<S> Iterator for IntoIter<S> {
    type Item = S;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.take()
    }
}

impl<S, M> IntoIterator for Rail<S, M> {
    type Item = S;
    type IntoIter = IntoIter<S>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter {
            inner: self.into_value(),
        }
    }
}

impl<'a, S, M> IntoIterator for &'a Rail<S, M> {
    type Item = &'a S;
    type IntoIter = Iter<'a, S>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<S, M> Rail<S, M> {
    /// Iterates over the success value; yields nothing on the failure track.
    pub fn iter(&self) -> Iter<'_, S> {
        Iter {
            inner: self.success_value(),
        }
    }

    /// Iterates over the failure messages; yields nothing on the success track.
    pub fn iter_messages(&self) -> core::slice::Iter<'_, M> {
        match self {
            Self::Success(_) => [].iter(),
            Self::Failure(messages) => messages.iter(),
        }
    }
}
